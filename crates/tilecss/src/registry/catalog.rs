//! The pattern catalog, in picker order.
//!
//! Every id here must have a generator bound in
//! [`generate::GENERATORS`](crate::generate::GENERATORS); the registry
//! integration tests check both directions.

use super::{Capabilities as C, Category, PatternDescriptor};
use crate::settings::{Direction, SettingsOverride};

const fn caps(flags: &[C]) -> C {
    C::of(flags)
}

/// All registered patterns in declaration order.
pub static DESCRIPTORS: &[PatternDescriptor] = &[
    // ------------------------------------------------------------------ Basic
    PatternDescriptor {
        id: "dots",
        name: "Dots",
        category: Category::Basic,
        description: "Evenly spaced round dots, optionally staggered into a diagonal lattice.",
        capabilities: caps(&[C::SIZE, C::DOT_SIZE, C::OPACITY, C::STAGGER]),
        defaults: SettingsOverride {
            pattern_size: Some(32),
            dot_size: Some(4),
            ..SettingsOverride::NONE
        },
    },
    PatternDescriptor {
        id: "polka",
        name: "Polka Dots",
        category: Category::Basic,
        description: "Two interleaved dot grids in the pattern and secondary colors.",
        capabilities: caps(&[C::SIZE, C::DOT_SIZE, C::OPACITY, C::COLOR_ALT]),
        defaults: SettingsOverride {
            pattern_size: Some(40),
            dot_size: Some(12),
            ..SettingsOverride::NONE
        },
    },
    PatternDescriptor {
        id: "grid",
        name: "Grid",
        category: Category::Basic,
        description: "Square grid of thin lines.",
        capabilities: caps(&[C::SIZE, C::LINE_WIDTH, C::OPACITY]),
        defaults: SettingsOverride {
            pattern_size: Some(32),
            line_width: Some(1),
            ..SettingsOverride::NONE
        },
    },
    PatternDescriptor {
        id: "graph-paper",
        name: "Graph Paper",
        category: Category::Basic,
        description: "Major grid lines with a fainter four-way subdivision.",
        capabilities: caps(&[C::SIZE, C::LINE_WIDTH, C::OPACITY, C::CONTRAST]),
        defaults: SettingsOverride {
            pattern_size: Some(80),
            line_width: Some(2),
            contrast: Some(60),
            ..SettingsOverride::NONE
        },
    },
    PatternDescriptor {
        id: "blueprint",
        name: "Blueprint",
        category: Category::Basic,
        description: "Drafting grid: bold major lines over hairline minor lines.",
        capabilities: caps(&[C::SIZE, C::LINE_WIDTH, C::OPACITY, C::COLOR_ALT]),
        defaults: SettingsOverride {
            pattern_size: Some(100),
            line_width: Some(2),
            ..SettingsOverride::NONE
        },
    },
    PatternDescriptor {
        id: "checkerboard",
        name: "Checkerboard",
        category: Category::Basic,
        description: "Alternating squares in the pattern and secondary colors.",
        capabilities: caps(&[C::SIZE, C::OPACITY, C::COLOR_ALT]),
        defaults: SettingsOverride {
            pattern_size: Some(48),
            ..SettingsOverride::NONE
        },
    },
    // ------------------------------------------------------------------ Lines
    PatternDescriptor {
        id: "stripes",
        name: "Stripes",
        category: Category::Lines,
        description: "Parallel stripes in one of four directions.",
        capabilities: caps(&[C::SIZE, C::LINE_WIDTH, C::DIRECTION, C::OPACITY]),
        defaults: SettingsOverride {
            pattern_size: Some(24),
            line_width: Some(8),
            direction: Some(Direction::Horizontal),
            ..SettingsOverride::NONE
        },
    },
    PatternDescriptor {
        id: "diagonal-stripes",
        name: "Diagonal Stripes",
        category: Category::Lines,
        description: "Stripes at 45 degrees plus a free rotation.",
        capabilities: caps(&[C::SIZE, C::LINE_WIDTH, C::ROTATION, C::OPACITY]),
        defaults: SettingsOverride {
            pattern_size: Some(20),
            line_width: Some(6),
            ..SettingsOverride::NONE
        },
    },
    PatternDescriptor {
        id: "crosshatch",
        name: "Crosshatch",
        category: Category::Lines,
        description: "Two perpendicular sets of diagonal hairlines.",
        capabilities: caps(&[C::SIZE, C::LINE_WIDTH, C::ROTATION, C::OPACITY]),
        defaults: SettingsOverride {
            pattern_size: Some(16),
            line_width: Some(1),
            ..SettingsOverride::NONE
        },
    },
    PatternDescriptor {
        id: "pinstripe",
        name: "Pinstripe",
        category: Category::Lines,
        description: "Pairs of fine lines separated by a configurable gap.",
        capabilities: caps(&[C::SIZE, C::LINE_WIDTH, C::SPACING, C::DIRECTION, C::OPACITY]),
        defaults: SettingsOverride {
            pattern_size: Some(40),
            line_width: Some(2),
            spacing: Some(4),
            direction: Some(Direction::Vertical),
            ..SettingsOverride::NONE
        },
    },
    PatternDescriptor {
        id: "zigzag",
        name: "Zigzag",
        category: Category::Lines,
        description: "Horizontal zigzag bands built from four corner gradients.",
        capabilities: caps(&[C::SIZE, C::OPACITY]),
        defaults: SettingsOverride {
            pattern_size: Some(40),
            ..SettingsOverride::NONE
        },
    },
    PatternDescriptor {
        id: "chevron",
        name: "Chevron",
        category: Category::Lines,
        description: "Zigzag bands whose notch depth follows the amplitude.",
        capabilities: caps(&[C::SIZE, C::AMPLITUDE, C::OPACITY]),
        defaults: SettingsOverride {
            pattern_size: Some(48),
            amplitude: Some(12),
            ..SettingsOverride::NONE
        },
    },
    PatternDescriptor {
        id: "waves",
        name: "Waves",
        category: Category::Lines,
        description: "Smooth sine-like strokes drawn as an embedded SVG path.",
        capabilities: caps(&[C::SIZE, C::AMPLITUDE, C::FREQUENCY, C::LINE_WIDTH, C::OPACITY]),
        defaults: SettingsOverride {
            pattern_size: Some(60),
            amplitude: Some(10),
            frequency: Some(2),
            line_width: Some(3),
            ..SettingsOverride::NONE
        },
    },
    // -------------------------------------------------------------- Geometric
    PatternDescriptor {
        id: "diamonds",
        name: "Diamonds",
        category: Category::Geometric,
        description: "A lattice of diamonds from quadrant sectors turned 45 degrees.",
        capabilities: caps(&[C::SIZE, C::OPACITY]),
        defaults: SettingsOverride {
            pattern_size: Some(40),
            ..SettingsOverride::NONE
        },
    },
    PatternDescriptor {
        id: "argyle",
        name: "Argyle",
        category: Category::Geometric,
        description: "Diamonds crossed by thin diagonal stitch lines.",
        capabilities: caps(&[C::SIZE, C::LINE_WIDTH, C::OPACITY, C::COLOR_ALT]),
        defaults: SettingsOverride {
            pattern_size: Some(60),
            line_width: Some(1),
            ..SettingsOverride::NONE
        },
    },
    PatternDescriptor {
        id: "triangles",
        name: "Triangles",
        category: Category::Geometric,
        description: "Half-square triangles with a smaller accent triangle.",
        capabilities: caps(&[C::SIZE, C::OPACITY, C::COLOR_ALT]),
        defaults: SettingsOverride {
            pattern_size: Some(40),
            ..SettingsOverride::NONE
        },
    },
    PatternDescriptor {
        id: "honeycomb",
        name: "Honeycomb",
        category: Category::Geometric,
        description: "Hexagonal cells with shaded edges.",
        capabilities: caps(&[C::SIZE, C::OPACITY, C::LIGHTING]),
        defaults: SettingsOverride {
            pattern_size: Some(40),
            lighting: Some(30),
            ..SettingsOverride::NONE
        },
    },
    PatternDescriptor {
        id: "scales",
        name: "Scales",
        category: Category::Geometric,
        description: "Overlapping semicircular fish scales.",
        capabilities: caps(&[C::SIZE, C::LINE_WIDTH, C::OPACITY]),
        defaults: SettingsOverride {
            pattern_size: Some(40),
            line_width: Some(3),
            ..SettingsOverride::NONE
        },
    },
    PatternDescriptor {
        id: "circles",
        name: "Concentric Circles",
        category: Category::Geometric,
        description: "Rings radiating from the center of every tile.",
        capabilities: caps(&[C::SIZE, C::LINE_WIDTH, C::SPACING, C::OPACITY]),
        defaults: SettingsOverride {
            pattern_size: Some(60),
            line_width: Some(2),
            spacing: Some(8),
            ..SettingsOverride::NONE
        },
    },
    PatternDescriptor {
        id: "sunburst",
        name: "Sunburst",
        category: Category::Geometric,
        description: "Rays fanning out from the center of the box.",
        capabilities: caps(&[C::ROTATION, C::DENSITY, C::OPACITY]),
        defaults: SettingsOverride {
            density: Some(40),
            ..SettingsOverride::NONE
        },
    },
    PatternDescriptor {
        id: "herringbone",
        name: "Herringbone",
        category: Category::Geometric,
        description: "Staggered planks meeting in a V.",
        capabilities: caps(&[C::SIZE, C::OPACITY, C::COLOR_ALT]),
        defaults: SettingsOverride {
            pattern_size: Some(32),
            ..SettingsOverride::NONE
        },
    },
    PatternDescriptor {
        id: "bricks",
        name: "Bricks",
        category: Category::Geometric,
        description: "Running-bond brickwork with lit and shaded bricks.",
        capabilities: caps(&[C::SIZE, C::OPACITY, C::LIGHTING]),
        defaults: SettingsOverride {
            pattern_size: Some(58),
            lighting: Some(20),
            ..SettingsOverride::NONE
        },
    },
    // ------------------------------------------------------------ Dimensional
    PatternDescriptor {
        id: "isometric",
        name: "Isometric Grid",
        category: Category::Dimensional,
        description: "Lines at 30 and 150 degrees forming an isometric lattice.",
        capabilities: caps(&[C::SIZE, C::LINE_WIDTH, C::OPACITY]),
        defaults: SettingsOverride {
            pattern_size: Some(40),
            line_width: Some(2),
            ..SettingsOverride::NONE
        },
    },
    PatternDescriptor {
        id: "cubes",
        name: "3D Cubes",
        category: Category::Dimensional,
        description: "Stacked cubes with a lit and a shaded face.",
        capabilities: caps(&[C::SIZE, C::OPACITY, C::LIGHTING]),
        defaults: SettingsOverride {
            pattern_size: Some(40),
            lighting: Some(25),
            ..SettingsOverride::NONE
        },
    },
    PatternDescriptor {
        id: "steps",
        name: "Steps",
        category: Category::Dimensional,
        description: "Staircase of treads and risers.",
        capabilities: caps(&[C::SIZE, C::DEPTH, C::OPACITY, C::LIGHTING]),
        defaults: SettingsOverride {
            pattern_size: Some(16),
            depth: Some(7),
            lighting: Some(30),
            ..SettingsOverride::NONE
        },
    },
    PatternDescriptor {
        id: "pyramids",
        name: "Pyramids",
        category: Category::Dimensional,
        description: "Square pyramids seen from above, one shade per face.",
        capabilities: caps(&[C::SIZE, C::OPACITY, C::LIGHTING]),
        defaults: SettingsOverride {
            pattern_size: Some(48),
            lighting: Some(30),
            ..SettingsOverride::NONE
        },
    },
    // --------------------------------------------------------------- Textures
    PatternDescriptor {
        id: "noise",
        name: "Noise",
        category: Category::Textures,
        description: "Fine grain from an SVG turbulence filter.",
        capabilities: caps(&[C::SIZE, C::OPACITY, C::DENSITY, C::CONTRAST]),
        defaults: SettingsOverride {
            pattern_size: Some(120),
            density: Some(60),
            contrast: Some(50),
            opacity: Some(0.6),
            ..SettingsOverride::NONE
        },
    },
    PatternDescriptor {
        id: "carbon",
        name: "Carbon Fibre",
        category: Category::Textures,
        description: "Tight woven fibre dots with soft highlights.",
        capabilities: caps(&[C::SIZE, C::OPACITY, C::CONTRAST]),
        defaults: SettingsOverride {
            pattern_size: Some(16),
            contrast: Some(40),
            ..SettingsOverride::NONE
        },
    },
    PatternDescriptor {
        id: "plaid",
        name: "Plaid",
        category: Category::Textures,
        description: "Crossing translucent bands with accent threads.",
        capabilities: caps(&[C::SIZE, C::LINE_WIDTH, C::OPACITY, C::COLOR_ALT, C::WEAVE]),
        defaults: SettingsOverride {
            pattern_size: Some(60),
            line_width: Some(4),
            weave: Some(true),
            ..SettingsOverride::NONE
        },
    },
    PatternDescriptor {
        id: "weave",
        name: "Basket Weave",
        category: Category::Textures,
        description: "Interlaced strips alternating direction per tile.",
        capabilities: caps(&[C::SIZE, C::OPACITY, C::COLOR_ALT, C::WEAVE]),
        defaults: SettingsOverride {
            pattern_size: Some(30),
            weave: Some(true),
            ..SettingsOverride::NONE
        },
    },
];
