use serde::{Deserialize, Serialize};

/// A string that does not name any variant of the target enum.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid {field} value: {value:?}")]
pub struct ParseEnumError {
    pub field: String,
    pub value: String,
}

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every variant, in display order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ParseEnumError {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(Role {
    MedicalStudent => "Medical Student",
    Resident => "Resident",
    Fellow => "Fellow",
    App => "APP",
    Attending => "Attending",
    Rn => "RN",
    Rt => "RT",
});

str_enum!(Feedback {
    Yes => "yes",
    No => "no",
});

impl Default for Role {
    fn default() -> Self {
        Role::MedicalStudent
    }
}

impl Default for Feedback {
    fn default() -> Self {
        Feedback::Yes
    }
}

impl Feedback {
    /// Label shown next to the radio button and on the metrics page.
    pub fn label(&self) -> &'static str {
        match self {
            Feedback::Yes => "👍 Yes",
            Feedback::No => "👎 No",
        }
    }
}
