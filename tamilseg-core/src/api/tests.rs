//! Tests for the tokenizer API

#[cfg(test)]
mod api_tests {
    use crate::api::*;
    use crate::error::CoreError;

    #[test]
    fn test_validation() {
        assert_eq!(validate_text("தமிழ் மொழி").unwrap(), "தமிழ் மொழி");
        assert_eq!(validate_text("  தமிழ் மொழி  ").unwrap(), "தமிழ் மொழி");

        for bad in ["", "   ", "\n\t", "\u{1F}", " \u{1C}\u{1D} "] {
            assert!(matches!(validate_text(bad), Err(Error::InvalidInput(_))));
        }
    }

    #[test]
    fn test_information_separators_count_as_whitespace() {
        let tokenizer = TamilTokenizer::new();
        assert_eq!(
            tokenizer.clean_text("அ\u{1C}\u{1C}ஆ", false).unwrap(),
            "அ ஆ"
        );
        assert_eq!(
            tokenizer.tokenize_sentences("\u{1F}வணக்கம்\u{1F}").unwrap(),
            vec!["வணக்கம்"]
        );
    }

    #[test]
    fn test_every_operation_rejects_blank_text() {
        let tokenizer = TamilTokenizer::new();

        assert!(matches!(
            tokenizer.tokenize_words(""),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            tokenizer.tokenize_sentences("   "),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            tokenizer.tokenize_characters("\n"),
            Err(Error::InvalidInput(_))
        ));
        assert!(tokenizer.tokenize_graphemes("").is_err());
        assert!(tokenizer.tokenize_syllables("").is_err());
        assert!(tokenizer.clean_text(" ", true).is_err());
        assert!(tokenizer.normalize_text(" ").is_err());
        assert!(tokenizer.analyze_word_structure("").is_err());
        assert!(tokenizer.get_statistics("").is_err());
    }

    #[test]
    fn test_word_tokenization() {
        let tokenizer = TamilTokenizer::new();
        let words = tokenizer.tokenize_words("தமிழ் மொழி அழகான மொழி").unwrap();
        assert_eq!(words, vec!["தமிழ்", "மொழி", "அழகான", "மொழி"]);

        let words = tokenizer.tokenize_words("தமிழ்   மொழி").unwrap();
        assert_eq!(words, vec!["தமிழ்", "மொழி"]);
    }

    #[test]
    fn test_sentence_tokenization() {
        let tokenizer = TamilTokenizer::new();
        let sentences = tokenizer
            .tokenize_sentences("வணக்கம். நீங்கள் எப்படி இருக்கிறீர்கள்?")
            .unwrap();
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].contains("வணக்கம்"));
        assert!(sentences[1].contains("நீங்கள்"));
    }

    #[test]
    fn test_character_tokenization() {
        let tokenizer = TamilTokenizer::new();
        let chars = tokenizer.tokenize_characters("த மி").unwrap();
        assert_eq!(chars, vec!["த", "ம", "ி"]);
    }

    #[test]
    fn test_grapheme_and_syllable_tokenization() {
        let tokenizer = TamilTokenizer::new();
        assert_eq!(
            tokenizer.tokenize_graphemes("தமிழ்").unwrap(),
            vec!["த", "மி", "ழ", "்"]
        );
        assert_eq!(
            tokenizer.tokenize_syllables("தமிழ்").unwrap(),
            vec!["த", "மி", "ழ"]
        );
    }

    #[test]
    fn test_dispatcher() {
        let tokenizer = TamilTokenizer::new();
        assert_eq!(tokenizer.tokenize("தமிழ் மொழி", "words").unwrap().len(), 2);
        assert_eq!(
            tokenizer
                .tokenize("வணக்கம். நலமா?", "SENTENCES")
                .unwrap()
                .len(),
            2
        );
        assert_eq!(tokenizer.tokenize("தமிழ்", "Characters").unwrap().len(), 5);
        assert_eq!(tokenizer.tokenize("தமிழ்", "graphemes").unwrap().len(), 4);
        assert_eq!(tokenizer.tokenize("தமிழ்", "syllables").unwrap().len(), 3);
    }

    #[test]
    fn test_dispatcher_rejects_unknown_method() {
        let tokenizer = TamilTokenizer::new();
        let err = tokenizer.tokenize("தமிழ்", "bogus").unwrap_err();
        assert!(matches!(err, Error::UnsupportedOperation(_)));
        assert!(err.to_string().contains("bogus"));
    }

    #[test]
    fn test_method_parsing() {
        for method in TokenizeMethod::ALL {
            assert_eq!(method.as_str().parse::<TokenizeMethod>().unwrap(), method);
            assert_eq!(
                method
                    .to_string()
                    .to_uppercase()
                    .parse::<TokenizeMethod>()
                    .unwrap(),
                method
            );
        }
        assert_eq!(TokenizeMethod::default(), TokenizeMethod::Words);
    }

    #[test]
    fn test_clean_and_normalize() {
        let tokenizer = TamilTokenizer::new();
        assert_eq!(tokenizer.clean_text("A  B   C", false).unwrap(), "A B C");
        assert_eq!(
            tokenizer.clean_text("தமிழ், மொழி!", true).unwrap(),
            "தமிழ் மொழி"
        );
        assert_eq!(
            tokenizer.normalize_text("  தமிழ்   மொழி  ").unwrap(),
            "தமிழ் மொழி"
        );
    }

    #[test]
    fn test_config_builder() {
        let config = Config::builder()
            .method("Syllables")
            .strip_punctuation(true)
            .build()
            .unwrap();
        assert_eq!(config.default_method(), TokenizeMethod::Syllables);
        assert!(config.strip_punctuation());

        let tokenizer = TamilTokenizer::with_config(config);
        assert_eq!(tokenizer.tokenize_default("தமிழ்").unwrap().len(), 3);
        assert_eq!(tokenizer.clean("தமிழ், மொழி!").unwrap(), "தமிழ் மொழி");
    }

    #[test]
    fn test_config_builder_rejects_unknown_method() {
        let result = Config::builder().method("paragraphs").build();
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_default_config() {
        let tokenizer = TamilTokenizer::new();
        assert_eq!(tokenizer.config(), &Config::default());
        assert_eq!(tokenizer.tokenize_default("தமிழ் மொழி").unwrap().len(), 2);
        assert_eq!(tokenizer.clean("தமிழ், மொழி!").unwrap(), "தமிழ், மொழி!");
    }

    #[test]
    fn test_input_variants() {
        let tokenizer = TamilTokenizer::new();

        let text = tokenizer.read_input(Input::from_text("தமிழ்")).unwrap();
        assert_eq!(text, "தமிழ்");

        let bytes = tokenizer
            .read_input(Input::from_bytes("மொழி".as_bytes().to_vec()))
            .unwrap();
        assert_eq!(bytes, "மொழி");

        let reader = tokenizer
            .read_input(Input::from_reader(std::io::Cursor::new(b"abc".to_vec())))
            .unwrap();
        assert_eq!(reader, "abc");
    }

    #[test]
    fn test_non_utf8_bytes_are_invalid_input() {
        let result = Input::from_bytes(vec![0xff, 0xfe, 0x00]).into_text();
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_missing_file_is_infrastructure_error() {
        let result = Input::from_file("/nonexistent/tamil.txt").into_text();
        assert!(matches!(result, Err(Error::Infrastructure(_))));
    }

    #[test]
    fn test_segmentation_failure_wraps_cause() {
        let err = Error::segmentation("tokenize_graphemes")(CoreError::CoverageGap { offset: 4 });
        assert!(matches!(
            err,
            Error::SegmentationFailure {
                operation: "tokenize_graphemes",
                source: CoreError::CoverageGap { offset: 4 }
            }
        ));
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("byte 4"));
    }

    #[test]
    fn test_statistics_on_foreign_text() {
        let stats = TamilTokenizer::new()
            .get_statistics("Hello World!")
            .unwrap();
        assert_eq!(stats.in_script_characters, 0);
        assert_eq!(stats.conjunct_word_percentage, 0.0);
        assert_eq!(stats.vowel_mark_word_percentage, 0.0);
    }

    #[test]
    fn test_statistics_use_trimmed_text() {
        let stats = TamilTokenizer::new().get_statistics("  அ  ").unwrap();
        assert_eq!(stats.total_characters, 1);
    }

    #[test]
    fn test_default_tokenizer_is_shared() {
        let a = default_tokenizer() as *const TamilTokenizer;
        let b = default_tokenizer() as *const TamilTokenizer;
        assert_eq!(a, b);

        assert_eq!(tokenize_words("தமிழ் மொழி").unwrap().len(), 2);
        assert_eq!(tokenize_sentences("வணக்கம். நலமா?").unwrap().len(), 2);
        assert!(tokenize_characters("தமிழ்").unwrap().len() >= 3);
        assert_eq!(clean_text("தமிழ்   மொழி", false).unwrap(), "தமிழ் மொழி");
        assert_eq!(normalize_text("  தமிழ்   மொழி  ").unwrap(), "தமிழ் மொழி");
        assert!(tokenize("தமிழ்", "invalid_method").is_err());
    }
}
