use super::ModelError;

/// Macro to generate enum with as_str + std::str::FromStr pattern.
///
/// Serde goes through the wire string on both sides so that values like
/// "in-person" survive serialization unchanged.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

str_enum!(UserRole {
    Client => "client",
    Lawyer => "lawyer",
});

str_enum!(UrgencyLevel {
    Low => "low",
    Medium => "medium",
    High => "high",
    Urgent => "urgent",
});

impl Default for UrgencyLevel {
    fn default() -> Self {
        Self::Medium
    }
}

str_enum!(MeetingType {
    Online => "online",
    InPerson => "in-person",
    Phone => "phone",
});

str_enum!(RequestStatus {
    Pending => "pending",
    Accepted => "accepted",
    Rejected => "rejected",
    Cancelled => "cancelled",
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn user_role_round_trip() {
        for (variant, s) in [(UserRole::Client, "client"), (UserRole::Lawyer, "lawyer")] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(UserRole::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn urgency_round_trip() {
        for (variant, s) in [
            (UrgencyLevel::Low, "low"),
            (UrgencyLevel::Medium, "medium"),
            (UrgencyLevel::High, "high"),
            (UrgencyLevel::Urgent, "urgent"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(UrgencyLevel::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn urgency_defaults_to_medium() {
        assert_eq!(UrgencyLevel::default(), UrgencyLevel::Medium);
    }

    #[test]
    fn meeting_type_uses_hyphenated_wire_string() {
        assert_eq!(MeetingType::InPerson.as_str(), "in-person");
        assert_eq!(
            serde_json::to_string(&MeetingType::InPerson).unwrap(),
            "\"in-person\""
        );
        let parsed: MeetingType = serde_json::from_str("\"in-person\"").unwrap();
        assert_eq!(parsed, MeetingType::InPerson);
    }

    #[test]
    fn request_status_round_trip() {
        for (variant, s) in [
            (RequestStatus::Pending, "pending"),
            (RequestStatus::Accepted, "accepted"),
            (RequestStatus::Rejected, "rejected"),
            (RequestStatus::Cancelled, "cancelled"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(RequestStatus::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn invalid_enum_returns_error() {
        assert!(UserRole::from_str("admin").is_err());
        assert!(UrgencyLevel::from_str("critical").is_err());
        assert!(MeetingType::from_str("in person").is_err());
        assert!(RequestStatus::from_str("").is_err());
    }

    #[test]
    fn serde_rejects_unknown_wire_string() {
        let result: Result<UrgencyLevel, _> = serde_json::from_str("\"asap\"");
        assert!(result.is_err());
    }
}
