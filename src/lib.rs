//! slugline - Convert arbitrary text into URL-safe slugs
//!
//! A slug contains only `a-z`, `0-9`, `.`, `-`, `_` and `~`. Text is trimmed,
//! case folded, its whitespace and then every other disallowed character is
//! replaced by a configurable symbol, and the result is cut to a maximum length.
//!
//! Slug generation is a pure function of the text and the [`Config`]: it never
//! fails and performs no I/O, so one configuration can be shared freely
//! between threads.

pub mod config;
pub mod error;
pub mod transform;

pub use config::{
    Case, Config, DEFAULT_CHAR_SYMBOL, DEFAULT_MAX_LENGTH, DEFAULT_SPACE_SYMBOL,
};
pub use error::{Result, SlugError};
pub use transform::{is_slug_char, Policy};

/// The default configuration: trim, lowercase, `_` for whitespace, `-` for
/// other characters, at most 32 characters, runs collapsed.
pub fn default_configuration() -> Config {
    Config::default()
}

/// Slug `text` with the default configuration
///
/// # Example
/// ```
/// assert_eq!(slugline::slug("\tHello,  World! "), "hello-_world-");
/// ```
pub fn slug(text: &str) -> String {
    slug_with_config(text, &default_configuration())
}

/// Slug `text` with an explicit configuration
///
/// # Arguments
/// * `text` - Any text, including the empty string
/// * `config` - Configuration, read but never modified
///
/// # Returns
/// The slug, possibly empty. Replacement symbols are used as given, see
/// [`Config::check_symbols`] to vet them beforehand.
pub fn slug_with_config(text: &str, config: &Config) -> String {
    transform::transform(text, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_unchanged() {
        assert_eq!(slug("foo"), "foo");
    }

    #[test]
    fn test_slug_mixed_case() {
        assert_eq!(slug("FoO"), "foo");
    }

    #[test]
    fn test_slug_spaces() {
        assert_eq!(slug("foo bar"), "foo_bar");
        assert_eq!(slug("f  oo"), "f_oo");
    }

    #[test]
    fn test_slug_special_characters() {
        assert_eq!(slug("f*$oo&śŚb@r"), "f-oo-b-r");
    }

    #[test]
    fn test_slug_allowed_symbols_pass_through() {
        assert_eq!(slug("foo-bar"), "foo-bar");
        assert_eq!(slug("v1.2_rc~3"), "v1.2_rc~3");
    }

    #[test]
    fn test_slug_trims_tabs_and_spaces() {
        assert_eq!(slug("\tFoo  "), "foo");
    }

    #[test]
    fn test_slug_empty_input() {
        assert_eq!(slug(""), "");
        assert_eq!(slug(" \t\n "), "");
    }

    #[test]
    fn test_default_max_length() {
        let text = "The quick brown fox jumps over the lazy dog, twice!";
        let unbounded = slug_with_config(
            text,
            &Config {
                max_length: 0,
                ..Config::default()
            },
        );
        assert_eq!(unbounded, "the_quick_brown_fox_jumps_over_the_lazy_dog-_twice-");

        let result = slug(text);
        assert_eq!(result.len(), 32);
        assert_eq!(result, &unbounded[..32]);
        assert_eq!(result, "the_quick_brown_fox_jumps_over_t");
    }

    #[test]
    fn test_max_length_one() {
        let config = Config {
            max_length: 1,
            ..Config::default()
        };
        assert_eq!(slug_with_config("Hello world", &config), "h");
    }

    #[test]
    fn test_max_length_zero_is_unbounded() {
        let config = Config {
            max_length: 0,
            ..Config::default()
        };
        let text = "word ".repeat(100);
        let expected = format!("{}word", "word_".repeat(99));
        assert_eq!(slug_with_config(&text, &config), expected);
    }

    #[test]
    fn test_preserve_length_policy() {
        let preserve = Config {
            max_length: 15,
            preserve_length: true,
            ..Config::default()
        };
        let collapse = Config {
            max_length: 15,
            preserve_length: false,
            ..Config::default()
        };
        assert_eq!(slug_with_config("F&&", &preserve), "f--");
        assert_eq!(slug_with_config("F&&", &collapse), "f-");
        assert_eq!(slug_with_config("foo  b@@r", &preserve), "foo__b--r");
        assert_eq!(slug_with_config("foo  b@@r", &collapse), "foo_b-r");
    }

    #[test]
    fn test_custom_symbols() {
        let config = Config {
            space_symbol: ".".to_string(),
            char_symbol: "~".to_string(),
            ..Config::default()
        };
        assert_eq!(slug_with_config("Hello World!", &config), "hello.world~");
    }

    #[test]
    fn test_no_trim() {
        let config = Config {
            trim_spaces: false,
            ..Config::default()
        };
        assert_eq!(slug_with_config("  foo  ", &config), "_foo_");
    }

    #[test]
    fn test_default_configuration_snapshot() {
        assert_eq!(
            default_configuration(),
            Config {
                trim_spaces: true,
                case: Case::Lowercase,
                space_symbol: "_".to_string(),
                char_symbol: "-".to_string(),
                max_length: 32,
                preserve_length: false,
            }
        );
    }

    #[test]
    fn test_shared_config_across_threads() {
        let config = default_configuration();
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| slug_with_config("Shared Config!", &config)))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), "shared_config-");
            }
        });
    }
}
