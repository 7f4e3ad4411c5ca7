pub mod normalized;
pub mod optimized;

pub use normalized::{
    CornerRadii, Effect, GradientStop, Layout, NormalizedNode, Padding, Paint, Position, Size,
    TextStyle, Vector,
};
pub use optimized::{
    ComponentKind, ComponentProperties, ComponentRecord, CustomColor, ImplementationGuide,
    InteractionPattern, LayoutProperties, Optimized, OptimizedComponent, StyleReference,
    TailwindConfig,
};
