//! Marquee Component
//!
//! Horizontally scrolling strip of short messages. The item list is rendered
//! twice so the animation can loop without a visible seam; the copy is hidden
//! from assistive technology.

use crate::markup::{Element, RenderContext, RenderOnce, div, el};
use crate::option::OptionValue;

option_enum! {
    #[derive(Default)]
    pub enum MarqueeSpeed {
        Slow => "slow",
        #[default]
        Normal => "normal",
        Fast => "fast",
    }
}

impl MarqueeSpeed {
    /// Duration of one full loop
    pub fn duration_secs(&self) -> u32 {
        match self {
            MarqueeSpeed::Slow => 60,
            MarqueeSpeed::Normal => 30,
            MarqueeSpeed::Fast => 15,
        }
    }
}

option_enum! {
    /// Direction the content travels
    #[derive(Default)]
    pub enum MarqueeDirection {
        #[default]
        Left => "left",
        Right => "right",
    }
}

#[derive(Debug, Clone)]
pub struct Marquee {
    items: Vec<String>,
    speed: MarqueeSpeed,
    direction: MarqueeDirection,
    pause_on_hover: bool,
}

impl Marquee {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            speed: MarqueeSpeed::Normal,
            direction: MarqueeDirection::Left,
            pause_on_hover: true,
        }
    }

    pub fn speed(mut self, speed: MarqueeSpeed) -> Self {
        self.speed = speed;
        self
    }

    pub fn direction(mut self, direction: MarqueeDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn pause_on_hover(mut self, pause: bool) -> Self {
        self.pause_on_hover = pause;
        self
    }

    fn copy(&self, hidden: bool) -> Element {
        el("ul")
            .class("marquee-content flex shrink-0 items-center gap-12 pr-12")
            .when(hidden, |copy| copy.aria("hidden", "true"))
            .children(
                self.items
                    .iter()
                    .map(|item| el("li").class("whitespace-nowrap text-sm text-gray-700").text(item)),
            )
    }
}

impl RenderOnce for Marquee {
    fn render(self, cx: &RenderContext) -> Element {
        let track = div()
            .class("marquee-track flex w-max animate-marquee")
            .class(format!("marquee-{}", self.direction.as_str()))
            .when(self.direction == MarqueeDirection::Right, |track| {
                track.class("[animation-direction:reverse]")
            })
            .when(self.pause_on_hover, |track| {
                track.class("hover:[animation-play-state:paused]")
            })
            .attr(
                "style",
                format!("--marquee-duration: {}s", self.speed.duration_secs()),
            )
            .child(self.copy(false))
            .child(self.copy(true));

        div()
            .class("marquee relative flex overflow-hidden")
            .class(format!("marquee-{}", self.speed.as_str()))
            .attr("role", "marquee")
            .aria("label", cx.t("marquee.label"))
            .child(track)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_is_duplicated_once() {
        let cx = RenderContext::default();
        let marquee = Marquee::new(["Release 0.3", "New docs"]).render(&cx);
        let copies = marquee.find_all(&|e| e.has_class("marquee-content"));
        assert_eq!(copies.len(), 2);
        assert!(!copies[0].has_attr("aria-hidden"));
        assert_eq!(copies[1].get_attr("aria-hidden"), Some("true"));
        assert_eq!(copies[0].text_content(), copies[1].text_content());
    }

    #[test]
    fn test_speed_and_direction() {
        let cx = RenderContext::default();
        let marquee = Marquee::new(["a"])
            .speed(MarqueeSpeed::Fast)
            .direction(MarqueeDirection::Right)
            .render(&cx);
        assert!(marquee.has_class("marquee-fast"));
        let track = marquee
            .find(&|e| e.has_class("marquee-track"))
            .expect("track");
        assert!(track.has_class("marquee-right"));
        assert_eq!(track.get_attr("style"), Some("--marquee-duration: 15s"));
    }

    #[test]
    fn test_pause_on_hover_flag() {
        let cx = RenderContext::default();
        let pausing = Marquee::new(["a"]).render(&cx);
        let running = Marquee::new(["a"]).pause_on_hover(false).render(&cx);
        let paused = |m: &Element| {
            m.find(&|e| e.has_class("hover:[animation-play-state:paused]"))
                .is_some()
        };
        assert!(paused(&pausing));
        assert!(!paused(&running));
    }

    #[test]
    fn test_every_speed_and_direction_is_marked() {
        let cx = RenderContext::default();
        for speed in MarqueeSpeed::ALL {
            for direction in MarqueeDirection::ALL {
                let marquee = Marquee::new(["a"])
                    .speed(*speed)
                    .direction(*direction)
                    .render(&cx);
                assert!(marquee.has_class(&format!("marquee-{speed}")));
                let track = marquee
                    .find(&|e| e.has_class("marquee-track"))
                    .expect("track");
                assert!(track.has_class(&format!("marquee-{direction}")));
                assert_eq!(
                    track.has_class("[animation-direction:reverse]"),
                    *direction == MarqueeDirection::Right
                );
                let duration = format!("--marquee-duration: {}s", speed.duration_secs());
                assert_eq!(track.get_attr("style"), Some(duration.as_str()));
            }
        }
    }
}
