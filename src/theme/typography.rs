//! Typography - Font Sizes and Weights

option_enum! {
    /// Font size scale
    #[derive(Default)]
    pub enum TextSize {
        Xs => "xs",
        Sm => "sm",
        #[default]
        Base => "base",
        Lg => "lg",
        Xl => "xl",
        Xl2 => "2xl",
        Xl3 => "3xl",
        Xl4 => "4xl",
    }
}

impl TextSize {
    pub fn class(&self) -> &'static str {
        match self {
            TextSize::Xs => "text-xs",
            TextSize::Sm => "text-sm",
            TextSize::Base => "text-base",
            TextSize::Lg => "text-lg",
            TextSize::Xl => "text-xl",
            TextSize::Xl2 => "text-2xl",
            TextSize::Xl3 => "text-3xl",
            TextSize::Xl4 => "text-4xl sm:text-5xl",
        }
    }

    /// Tracking and leading that pair with this size in headings
    pub fn heading_classes(&self) -> &'static str {
        match self {
            TextSize::Xs | TextSize::Sm | TextSize::Base => "leading-6",
            TextSize::Lg | TextSize::Xl => "leading-7",
            TextSize::Xl2 | TextSize::Xl3 => "leading-tight tracking-tight",
            TextSize::Xl4 => "leading-none tracking-tight",
        }
    }
}

option_enum! {
    /// Font weight scale
    #[derive(Default)]
    pub enum FontWeight {
        #[default]
        Normal => "normal",
        Medium => "medium",
        Semibold => "semibold",
        Bold => "bold",
    }
}

impl FontWeight {
    pub fn class(&self) -> &'static str {
        match self {
            FontWeight::Normal => "font-normal",
            FontWeight::Medium => "font-medium",
            FontWeight::Semibold => "font-semibold",
            FontWeight::Bold => "font-bold",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!("2xl".parse::<TextSize>().expect("valid"), TextSize::Xl2);
        assert_eq!(TextSize::Xl3.to_string(), "3xl");
        assert_eq!(FontWeight::default(), FontWeight::Normal);
    }
}
