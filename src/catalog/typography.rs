//! Typography component parameters.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{ButtonParams, ComponentParams, choice, required_list, required_text};
use crate::components::typography::{
    Heading, HeadingLevel, Hero, HeroAlign, Kbd, Subheading, Text, TextTag,
};
use crate::error::Result;
use crate::markup::{Element, RenderContext, RenderOnce};
use crate::option::parse_option;
use crate::theme::{FontWeight, TextSize, Tone};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct HeadingParams {
    pub text: Option<String>,
    /// 1 through 6 (default 2)
    #[schemars(range(min = 1, max = 6))]
    pub level: Option<u8>,
    #[schemars(with = "Option<TextSize>")]
    pub size: Option<String>,
    pub id: Option<String>,
}

impl ComponentParams for HeadingParams {
    const NAME: &'static str = "heading";

    fn build(&self, cx: &RenderContext) -> Result<Element> {
        let component = Self::NAME;
        let level = match self.level {
            Some(level) => HeadingLevel::try_from(level)?,
            None => HeadingLevel::default(),
        };

        let heading = Heading::new(required_text(component, "text", &self.text)?).level(level);
        let heading = match &self.size {
            Some(size) => heading.size(parse_option(component, "size", size)?),
            None => heading,
        };
        let heading = match &self.id {
            Some(id) => heading.id(id),
            None => heading,
        };
        Ok(heading.render(cx))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct SubheadingParams {
    pub text: Option<String>,
    #[schemars(with = "Option<Tone>")]
    pub tone: Option<String>,
}

impl ComponentParams for SubheadingParams {
    const NAME: &'static str = "subheading";

    fn build(&self, cx: &RenderContext) -> Result<Element> {
        let component = Self::NAME;
        Ok(Subheading::new(required_text(component, "text", &self.text)?)
            .tone(choice(component, "tone", &self.tone)?)
            .render(cx))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct TextParams {
    pub text: Option<String>,
    #[schemars(with = "Option<TextSize>")]
    pub size: Option<String>,
    #[schemars(with = "Option<FontWeight>")]
    pub weight: Option<String>,
    #[schemars(with = "Option<Tone>")]
    pub tone: Option<String>,
    #[schemars(with = "Option<TextTag>")]
    pub tag: Option<String>,
}

impl ComponentParams for TextParams {
    const NAME: &'static str = "text";

    fn build(&self, cx: &RenderContext) -> Result<Element> {
        let component = Self::NAME;
        Ok(Text::new(required_text(component, "text", &self.text)?)
            .size(choice(component, "size", &self.size)?)
            .weight(choice(component, "weight", &self.weight)?)
            .tone(choice(component, "tone", &self.tone)?)
            .tag(choice(component, "tag", &self.tag)?)
            .render(cx))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct KbdParams {
    pub keys: Option<Vec<String>>,
}

impl ComponentParams for KbdParams {
    const NAME: &'static str = "kbd";

    fn build(&self, cx: &RenderContext) -> Result<Element> {
        let keys = required_list(Self::NAME, "keys", &self.keys)?;
        Ok(Kbd::new(keys.iter().map(String::as_str)).render(cx))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct HeroParams {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub eyebrow: Option<String>,
    #[schemars(with = "Option<HeroAlign>")]
    pub align: Option<String>,
    pub actions: Vec<ButtonParams>,
}

impl ComponentParams for HeroParams {
    const NAME: &'static str = "hero";

    fn build(&self, cx: &RenderContext) -> Result<Element> {
        let component = Self::NAME;
        let actions = self
            .actions
            .iter()
            .map(ButtonParams::to_button)
            .collect::<Result<Vec<_>>>()?;

        let hero = Hero::new(required_text(component, "title", &self.title)?)
            .align(choice(component, "align", &self.align)?)
            .actions(actions);
        let hero = match &self.subtitle {
            Some(subtitle) => hero.subtitle(subtitle),
            None => hero,
        };
        let hero = match &self.eyebrow {
            Some(eyebrow) => hero.eyebrow(eyebrow),
            None => hero,
        };
        Ok(hero.render(cx))
    }
}
