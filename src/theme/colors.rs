//! Colors - Semantic Tones

option_enum! {
    /// Semantic color tone shared by badges, text, tooltips and alerts
    #[derive(Default)]
    pub enum Tone {
        #[default]
        Neutral => "neutral",
        Info => "info",
        Success => "success",
        Warning => "warning",
        Danger => "danger",
    }
}

impl Tone {
    /// Foreground text color
    pub fn text_class(&self) -> &'static str {
        match self {
            Tone::Neutral => "text-gray-700",
            Tone::Info => "text-blue-700",
            Tone::Success => "text-green-700",
            Tone::Warning => "text-amber-700",
            Tone::Danger => "text-red-700",
        }
    }

    /// Muted foreground for secondary copy
    pub fn muted_text_class(&self) -> &'static str {
        match self {
            Tone::Neutral => "text-gray-500",
            Tone::Info => "text-blue-500",
            Tone::Success => "text-green-500",
            Tone::Warning => "text-amber-500",
            Tone::Danger => "text-red-500",
        }
    }

    /// Tinted background with matching text, used by badges and tooltips
    pub fn soft_classes(&self) -> &'static str {
        match self {
            Tone::Neutral => "bg-gray-100 text-gray-700",
            Tone::Info => "bg-blue-50 text-blue-700",
            Tone::Success => "bg-green-50 text-green-700",
            Tone::Warning => "bg-amber-50 text-amber-800",
            Tone::Danger => "bg-red-50 text-red-700",
        }
    }

    /// Solid background with contrasting text
    pub fn solid_classes(&self) -> &'static str {
        match self {
            Tone::Neutral => "bg-gray-900 text-white",
            Tone::Info => "bg-blue-600 text-white",
            Tone::Success => "bg-green-600 text-white",
            Tone::Warning => "bg-amber-500 text-gray-900",
            Tone::Danger => "bg-red-600 text-white",
        }
    }

    /// Ring color used for outlines
    pub fn ring_class(&self) -> &'static str {
        match self {
            Tone::Neutral => "ring-gray-500/10",
            Tone::Info => "ring-blue-700/10",
            Tone::Success => "ring-green-600/20",
            Tone::Warning => "ring-amber-600/20",
            Tone::Danger => "ring-red-600/10",
        }
    }
}
