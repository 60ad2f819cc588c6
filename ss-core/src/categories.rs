//! Closed vocabularies for every categorical column in the dataset.
//!
//! Each vocabulary is an enum whose serialized form is exactly the symbol written to (and read
//! back from) the exported table.  Declaration order matters: it is the order in which weights are
//! paired with symbols when sampling, so reordering variants changes every generated dataset.
use std::fmt;
use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

/// Common interface over the categorical column enums.
pub trait Vocabulary: Copy + Ord + fmt::Debug + fmt::Display + 'static {
    /// Name of the column this vocabulary populates.
    const COLUMN: &'static str;

    /// Every symbol, in declaration order.
    const ALL: &'static [Self];

    /// The symbol exactly as it appears in the exported table.
    fn as_str(self) -> &'static str;
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{value:?} is not a valid {column} value")]
pub struct UnknownSymbol {
    pub column: &'static str,
    pub value: String,
}

macro_rules! vocabulary {
    ($(#[$meta:meta])* $name:ident => $column:literal { $($variant:ident => $symbol:literal,)+ }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $symbol)] $variant,)+
        }

        impl Vocabulary for $name {
            const COLUMN: &'static str = $column;
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $symbol),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownSymbol;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($symbol => Ok(Self::$variant),)+
                    _ => Err(UnknownSymbol { column: $column, value: s.into() }),
                }
            }
        }
    };
}

vocabulary! {
    /// Listener age bracket.
    AgeGroup => "age_group" {
        Teen => "13-17",
        YoungAdult => "18-24",
        Adult => "25-34",
        MiddleAged => "35-44",
        Senior => "45+",
    }
}

vocabulary! {
    Gender => "gender" {
        Female => "female",
        Male => "male",
        NonBinary => "non_binary",
    }
}

vocabulary! {
    /// Coarse market region of the listener's account.
    Country => "country" {
        NorthAmerica => "NA",
        EuUk => "EU_UK",
        Latam => "LATAM",
        Asia => "ASIA",
        Africa => "AFRICA",
    }
}

vocabulary! {
    Subscription => "subscription" {
        Free => "free",
        Premium => "premium",
        Family => "family",
        Student => "student",
    }
}

vocabulary! {
    Platform => "platform" {
        Ios => "ios",
        Android => "android",
        Desktop => "desktop",
        Web => "web",
    }
}

vocabulary! {
    /// Latent per-user trait biasing how eagerly they skip.
    SkipTendency => "skip_tendency" {
        Low => "low",
        Medium => "medium",
        High => "high",
    }
}

vocabulary! {
    Genre => "genre" {
        Pop => "pop",
        HipHop => "hiphop",
        Electronic => "electronic",
        Rock => "rock",
        Latin => "latin",
        Classical => "classical",
        Indie => "indie",
        Jazz => "jazz",
    }
}

vocabulary! {
    TimeOfDay => "time_of_day" {
        Morning => "morning",
        Afternoon => "afternoon",
        Evening => "evening",
        Night => "night",
    }
}

vocabulary! {
    DayType => "day_type" {
        Weekday => "weekday",
        Weekend => "weekend",
    }
}

vocabulary! {
    /// Where the listening session takes place.
    Location => "location" {
        Home => "home",
        Commute => "commute",
        Work => "work",
        Gym => "gym",
    }
}
