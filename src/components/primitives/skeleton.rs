//! Skeleton Component
//!
//! Placeholder shapes shown while content loads.

use crate::markup::{Element, RenderContext, RenderOnce, div};

option_enum! {
    #[derive(Default)]
    pub enum SkeletonShape {
        #[default]
        Text => "text",
        Circle => "circle",
        Rect => "rect",
    }
}

option_enum! {
    #[derive(Default)]
    pub enum SkeletonWidth {
        #[default]
        Full => "full",
        Half => "half",
        Third => "third",
        Quarter => "quarter",
    }
}

impl SkeletonWidth {
    fn class(&self) -> &'static str {
        match self {
            SkeletonWidth::Full => "w-full",
            SkeletonWidth::Half => "w-1/2",
            SkeletonWidth::Third => "w-1/3",
            SkeletonWidth::Quarter => "w-1/4",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Skeleton {
    shape: SkeletonShape,
    lines: u32,
    width: SkeletonWidth,
}

impl Skeleton {
    pub fn new() -> Self {
        Self {
            shape: SkeletonShape::Text,
            lines: 1,
            width: SkeletonWidth::Full,
        }
    }

    pub fn shape(mut self, shape: SkeletonShape) -> Self {
        self.shape = shape;
        self
    }

    /// Number of text lines (text shape only), at least 1
    pub fn lines(mut self, lines: u32) -> Self {
        self.lines = lines.max(1);
        self
    }

    pub fn width(mut self, width: SkeletonWidth) -> Self {
        self.width = width;
        self
    }
}

impl Default for Skeleton {
    fn default() -> Self {
        Self::new()
    }
}

const BAR: &str = "animate-pulse rounded bg-gray-200";

impl RenderOnce for Skeleton {
    fn render(self, _cx: &RenderContext) -> Element {
        let root = div()
            .class("skeleton")
            .class(format!("skeleton-{}", self.shape))
            .aria("busy", "true")
            .aria("hidden", "true");

        match self.shape {
            SkeletonShape::Circle => root.class(BAR).class("size-10 rounded-full"),
            SkeletonShape::Rect => root.class(BAR).class("h-32").class(self.width.class()),
            SkeletonShape::Text => {
                let lines = self.lines;
                let width = self.width;
                root.class("space-y-2")
                    .class(width.class())
                    .children((0..lines).map(move |line| {
                        // The last of several lines trails off short.
                        let short = lines > 1 && line + 1 == lines;
                        div()
                            .class(BAR)
                            .class("h-4")
                            .class(if short { "w-2/3" } else { "w-full" })
                    }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_lines() {
        let cx = RenderContext::default();
        let skeleton = Skeleton::new().lines(3).render(&cx);
        assert_eq!(skeleton.child_nodes().len(), 3);
        let short = skeleton.find_all(&|e| e.has_class("w-2/3"));
        assert_eq!(short.len(), 1);
        assert_eq!(skeleton.get_attr("aria-busy"), Some("true"));
    }

    #[test]
    fn test_single_line_is_full_width() {
        let cx = RenderContext::default();
        let skeleton = Skeleton::new().render(&cx);
        assert_eq!(skeleton.child_nodes().len(), 1);
        assert!(skeleton.find(&|e| e.has_class("w-2/3")).is_none());
    }

    #[test]
    fn test_shapes() {
        let cx = RenderContext::default();
        let circle = Skeleton::new().shape(SkeletonShape::Circle).render(&cx);
        assert!(circle.has_class("rounded-full"));
        assert!(circle.child_nodes().is_empty());

        let rect = Skeleton::new()
            .shape(SkeletonShape::Rect)
            .width(SkeletonWidth::Half)
            .render(&cx);
        assert!(rect.has_class("skeleton-rect"));
        assert!(rect.has_class("w-1/2"));
    }

    #[test]
    fn test_zero_lines_clamped() {
        let cx = RenderContext::default();
        let skeleton = Skeleton::new().lines(0).render(&cx);
        assert_eq!(skeleton.child_nodes().len(), 1);
    }

    #[test]
    fn test_every_shape_and_width_is_applied() {
        use crate::option::OptionValue;
        let cx = RenderContext::default();
        for shape in SkeletonShape::ALL {
            for width in SkeletonWidth::ALL {
                let skeleton = Skeleton::new().shape(*shape).width(*width).render(&cx);
                assert!(skeleton.has_class(&format!("skeleton-{shape}")));
                let sized = width.class().split_whitespace().all(|token| skeleton.has_class(token));
                match shape {
                    SkeletonShape::Circle => assert!(skeleton.has_class("rounded-full")),
                    SkeletonShape::Text | SkeletonShape::Rect => assert!(sized, "{shape}/{width}"),
                }
            }
        }
    }
}
