//! Locale resolution and display-name data.
//!
//! The set of supported locales is fixed at compile time and read-only for
//! the life of the process. Resolution never fails: a language code with no
//! entry resolves to the default (English) locale. That fallback is policy,
//! not an error path, and is intentionally silent.

use tinystr::{tinystr, TinyAsciiStr};

/// A normalized primary language subtag, e.g. `"en"`, `"es"`, `"ca"`.
///
/// Construction strips region and script subtags (`"es-ES"` becomes `"es"`)
/// and lowercases the remainder; only the primary subtag drives locale
/// selection. Construction is infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageCode(TinyAsciiStr<8>);

impl LanguageCode {
    /// The crate-wide default language.
    pub const DEFAULT: Self = Self(tinystr!(8, "en"));

    /// Normalizes `source` into a primary language subtag.
    ///
    /// Codes that cannot be represented (empty, non-alphabetic, longer than
    /// eight bytes) normalize to `"und"`, which resolves to the default
    /// locale.
    pub fn new(source: &str) -> Self {
        let primary = source.split(['-', '_']).next().unwrap_or(source);
        match TinyAsciiStr::try_from_str(primary) {
            Ok(tiny) if !tiny.is_empty() && tiny.is_ascii_alphabetic() => {
                Self(tiny.to_ascii_lowercase())
            }
            _ => Self(tinystr!(8, "und")),
        }
    }

    /// Returns the normalized subtag.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for LanguageCode {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Display-name conventions for one language.
///
/// Weekday arrays are Sunday-first to match
/// [`chrono::Datelike::weekday`] numbering via `num_days_from_sunday`.
#[derive(Debug)]
pub struct Locale {
    code: &'static str,
    pub(crate) months_wide: [&'static str; 12],
    pub(crate) months_abbreviated: [&'static str; 12],
    pub(crate) weekdays_wide: [&'static str; 7],
    pub(crate) weekdays_abbreviated: [&'static str; 7],
    pub(crate) day_periods: [&'static str; 2],
}

impl Locale {
    /// Resolves a raw language code to a locale, falling back to English.
    pub fn resolve(language: &str) -> &'static Locale {
        Self::for_code(LanguageCode::new(language))
    }

    /// Resolves an already-normalized code to a locale, falling back to
    /// English.
    pub fn for_code(code: LanguageCode) -> &'static Locale {
        match code.as_str() {
            "en" => &EN,
            "es" => &ES,
            "ca" => &CA,
            _ => &EN,
        }
    }

    /// Returns the locale's primary language subtag.
    pub fn code(&self) -> &'static str {
        self.code
    }
}

static EN: Locale = Locale {
    code: "en",
    months_wide: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
    months_abbreviated: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    weekdays_wide: [
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ],
    weekdays_abbreviated: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
    day_periods: ["AM", "PM"],
};

static ES: Locale = Locale {
    code: "es",
    months_wide: [
        "enero",
        "febrero",
        "marzo",
        "abril",
        "mayo",
        "junio",
        "julio",
        "agosto",
        "septiembre",
        "octubre",
        "noviembre",
        "diciembre",
    ],
    months_abbreviated: [
        "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic",
    ],
    weekdays_wide: [
        "domingo",
        "lunes",
        "martes",
        "miércoles",
        "jueves",
        "viernes",
        "sábado",
    ],
    weekdays_abbreviated: ["dom", "lun", "mar", "mié", "jue", "vie", "sáb"],
    day_periods: ["a. m.", "p. m."],
};

static CA: Locale = Locale {
    code: "ca",
    months_wide: [
        "gener",
        "febrer",
        "març",
        "abril",
        "maig",
        "juny",
        "juliol",
        "agost",
        "setembre",
        "octubre",
        "novembre",
        "desembre",
    ],
    months_abbreviated: [
        "gen.", "febr.", "març", "abr.", "maig", "juny", "jul.", "ag.", "set.", "oct.", "nov.",
        "des.",
    ],
    weekdays_wide: [
        "diumenge",
        "dilluns",
        "dimarts",
        "dimecres",
        "dijous",
        "divendres",
        "dissabte",
    ],
    weekdays_abbreviated: ["dg.", "dl.", "dt.", "dc.", "dj.", "dv.", "ds."],
    day_periods: ["a. m.", "p. m."],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_region_subtags() {
        assert_eq!(LanguageCode::new("es-ES").as_str(), "es");
        assert_eq!(LanguageCode::new("en-US").as_str(), "en");
        assert_eq!(LanguageCode::new("ca_ES").as_str(), "ca");
    }

    #[test]
    fn lowercases_codes() {
        assert_eq!(LanguageCode::new("ES").as_str(), "es");
        assert_eq!(LanguageCode::new("Ca-es").as_str(), "ca");
    }

    #[test]
    fn unrepresentable_codes_normalize_to_und() {
        assert_eq!(LanguageCode::new("").as_str(), "und");
        assert_eq!(LanguageCode::new("123").as_str(), "und");
        assert_eq!(LanguageCode::new("verylonglanguage").as_str(), "und");
    }

    #[test]
    fn resolution_falls_back_to_english() {
        assert_eq!(Locale::resolve("xx").code(), "en");
        assert_eq!(Locale::resolve("").code(), "en");
        assert_eq!(Locale::resolve("und").code(), "en");
    }

    #[test]
    fn region_variants_resolve_like_base_language() {
        assert!(core::ptr::eq(Locale::resolve("es-ES"), Locale::resolve("es")));
        assert!(core::ptr::eq(Locale::resolve("en-US"), Locale::resolve("en")));
    }

    #[test]
    fn supported_languages_resolve_to_themselves() {
        for code in ["en", "es", "ca"] {
            assert_eq!(Locale::resolve(code).code(), code);
        }
    }
}
