//! Serde round trips of the public enumerations.

#[cfg(feature = "serialization")]
mod serialization_tests {
    use libtextkit::prelude::*;

    #[test]
    fn test_category_json() {
        let json = serde_json::to_string(&Category::UppercaseLetter).unwrap();
        assert_eq!(json, "\"UppercaseLetter\"");
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::UppercaseLetter);
    }

    #[test]
    fn test_char_class_json() {
        let class = Category::Vowel.except();
        let json = serde_json::to_string(&class).unwrap();
        let back: CharClass = serde_json::from_str(&json).unwrap();
        assert_eq!(back, class);
    }

    #[test]
    fn test_case_style_and_separator_json() {
        for style in CaseStyle::ALL {
            let json = serde_json::to_string(&style).unwrap();
            assert_eq!(serde_json::from_str::<CaseStyle>(&json).unwrap(), style);
        }
        for separator in Separator::ALL {
            let json = serde_json::to_string(&separator).unwrap();
            assert_eq!(serde_json::from_str::<Separator>(&json).unwrap(), separator);
        }
    }

    #[test]
    fn test_mask_region_json() {
        let region = MaskRegion::Range { start: 2, end: 5 };
        let json = serde_json::to_string(&region).unwrap();
        let back: MaskRegion = serde_json::from_str(&json).unwrap();
        assert_eq!(back, region);
        assert_eq!(Masker::default().apply("password", back), "pa****rd");
    }
}
