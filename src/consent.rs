//! The single piece of persisted state: the visitor's cookie decision.
//! All reads and writes go through `load`/`store`; nothing else touches the
//! storage key.

use web_sys::{window, Storage};

use crate::config::COOKIE_CONSENT_KEY;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CookieChoice {
    Accepted,
    Declined,
}

impl CookieChoice {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::Declined => "declined",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "accepted" => Some(Self::Accepted),
            "declined" => Some(Self::Declined),
            _ => None,
        }
    }
}

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

/// The stored choice, or `None` on a first visit (or an unreadable value).
pub fn load() -> Option<CookieChoice> {
    let value = local_storage()?.get_item(COOKIE_CONSENT_KEY).ok().flatten()?;
    CookieChoice::from_str(&value)
}

pub fn store(choice: CookieChoice) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(COOKIE_CONSENT_KEY, choice.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_round_trips_through_its_string_form() {
        for choice in [CookieChoice::Accepted, CookieChoice::Declined] {
            assert_eq!(CookieChoice::from_str(choice.as_str()), Some(choice));
        }
    }

    #[test]
    fn unknown_values_read_as_unset() {
        assert_eq!(CookieChoice::from_str(""), None);
        assert_eq!(CookieChoice::from_str("yes"), None);
        assert_eq!(CookieChoice::from_str("Accepted"), None);
    }
}
