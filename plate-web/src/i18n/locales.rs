use crate::theme::Country;

/// Supported interface languages. Closed set; every entry has a string table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Lang {
    En,
    #[default]
    Ru,
    Zh,
    Ja,
    Uk,
    Be,
    Kk,
    Es,
    Ba,
    Tt,
    Ko,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocaleMeta {
    pub lang: Lang,
    pub code: &'static str,
    pub name: &'static str,
    pub country: Country,
}

pub static LOCALE_META: [LocaleMeta; 11] = [
    LocaleMeta {
        lang: Lang::En,
        code: "en",
        name: "English",
        country: Country::Usa,
    },
    LocaleMeta {
        lang: Lang::Ru,
        code: "ru",
        name: "Русский",
        country: Country::Rus,
    },
    LocaleMeta {
        lang: Lang::Zh,
        code: "zh",
        name: "中文",
        country: Country::Chn,
    },
    LocaleMeta {
        lang: Lang::Ja,
        code: "ja",
        name: "日本語",
        country: Country::Jpn,
    },
    LocaleMeta {
        lang: Lang::Uk,
        code: "uk",
        name: "Українська",
        country: Country::Ukr,
    },
    LocaleMeta {
        lang: Lang::Be,
        code: "be",
        name: "Беларуская",
        country: Country::Blr,
    },
    LocaleMeta {
        lang: Lang::Kk,
        code: "kk",
        name: "Қазақша",
        country: Country::Kaz,
    },
    LocaleMeta {
        lang: Lang::Es,
        code: "es",
        name: "Español",
        country: Country::Esp,
    },
    LocaleMeta {
        lang: Lang::Ba,
        code: "ba",
        name: "Башҡортса",
        country: Country::Rus,
    },
    LocaleMeta {
        lang: Lang::Tt,
        code: "tt",
        name: "Татарча",
        country: Country::Rus,
    },
    LocaleMeta {
        lang: Lang::Ko,
        code: "ko",
        name: "한국어",
        country: Country::Kor,
    },
];

impl Lang {
    /// Declaration order; matches [`LOCALE_META`].
    pub const ALL: [Self; 11] = [
        Self::En,
        Self::Ru,
        Self::Zh,
        Self::Ja,
        Self::Uk,
        Self::Be,
        Self::Kk,
        Self::Es,
        Self::Ba,
        Self::Tt,
        Self::Ko,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn meta(self) -> &'static LocaleMeta {
        &LOCALE_META[self.index()]
    }

    #[must_use]
    pub fn code(self) -> &'static str {
        self.meta().code
    }

    /// Plate theme that accompanies this language.
    #[must_use]
    pub fn country(self) -> Country {
        self.meta().country
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_lowercase();
        LOCALE_META
            .iter()
            .find(|meta| meta.code == code)
            .map(|meta| meta.lang)
    }
}

/// Supported locales with their native names and plate themes.
#[must_use]
pub fn locales() -> &'static [LocaleMeta] {
    &LOCALE_META
}
