//! Country themes for the plate graphic: flag artwork and the country code strip.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Country {
    Rus,
    Usa,
    Chn,
    Jpn,
    Ukr,
    Blr,
    Kaz,
    Esp,
    Kor,
}

/// Simplified flag artwork, drawn with plain blocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlagPattern {
    /// Equal horizontal bands, top to bottom.
    Bands(&'static [&'static str]),
    /// A centred disc on a plain field.
    Disc {
        field: &'static str,
        disc: &'static str,
    },
    /// A star in the upper hoist corner.
    Star {
        field: &'static str,
        star: &'static str,
    },
    /// Bands with a corner canton.
    Canton {
        bands: &'static [&'static str],
        canton: &'static str,
    },
}

impl Country {
    pub const ALL: [Self; 9] = [
        Self::Rus,
        Self::Usa,
        Self::Chn,
        Self::Jpn,
        Self::Ukr,
        Self::Blr,
        Self::Kaz,
        Self::Esp,
        Self::Kor,
    ];

    /// International vehicle registration code printed on the plate.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Rus => "RUS",
            Self::Usa => "USA",
            Self::Chn => "CHN",
            Self::Jpn => "J",
            Self::Ukr => "UA",
            Self::Blr => "BY",
            Self::Kaz => "KZ",
            Self::Esp => "E",
            Self::Kor => "ROK",
        }
    }

    #[must_use]
    pub const fn css_key(self) -> &'static str {
        match self {
            Self::Rus => "rus",
            Self::Usa => "usa",
            Self::Chn => "chn",
            Self::Jpn => "jpn",
            Self::Ukr => "ukr",
            Self::Blr => "blr",
            Self::Kaz => "kaz",
            Self::Esp => "esp",
            Self::Kor => "kor",
        }
    }

    #[must_use]
    pub const fn flag(self) -> FlagPattern {
        match self {
            Self::Rus => FlagPattern::Bands(&["#FFFFFF", "#0039A6", "#D52B1E"]),
            Self::Usa => FlagPattern::Canton {
                bands: &["#B22234", "#FFFFFF", "#B22234", "#FFFFFF", "#B22234"],
                canton: "#3C3B6E",
            },
            Self::Chn => FlagPattern::Star {
                field: "#EE1C25",
                star: "#FFFF00",
            },
            Self::Jpn => FlagPattern::Disc {
                field: "#FFFFFF",
                disc: "#BC002D",
            },
            Self::Ukr => FlagPattern::Bands(&["#0057B7", "#FFD700"]),
            Self::Blr => FlagPattern::Bands(&["#C8313E", "#C8313E", "#4AA657"]),
            Self::Kaz => FlagPattern::Disc {
                field: "#00AFCA",
                disc: "#FEC50C",
            },
            Self::Esp => FlagPattern::Bands(&["#AA151B", "#F1BF00", "#F1BF00", "#AA151B"]),
            Self::Kor => FlagPattern::Disc {
                field: "#FFFFFF",
                disc: "#CD2E3A",
            },
        }
    }
}
