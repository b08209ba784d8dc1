use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Трейт для типов идентификаторов сущностей
///
/// Каждая сущность объявляет свой newtype над `u64`; счётчик коллекции
/// выдаёт следующий свободный номер через `from_raw`.
pub trait EntityId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Создать ID из сырого номера
    fn from_raw(raw: u64) -> Self;

    /// Получить сырой номер
    fn raw(&self) -> u64;

    /// Преобразовать ID в строку
    fn as_string(&self) -> String {
        self.raw().to_string()
    }

    /// Создать ID из строки
    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<u64>()
            .map(Self::from_raw)
            .map_err(|e| format!("Invalid id: {}", e))
    }
}

/// Объявление newtype-идентификатора с реализацией [`EntityId`]
#[macro_export]
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $crate::domain::common::EntityId for $name {
            fn from_raw(raw: u64) -> Self {
                Self(raw)
            }

            fn raw(&self) -> u64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::entity_id!(SampleId);

    #[test]
    fn raw_round_trip() {
        let id = SampleId::from_raw(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(id.as_string(), "42");
        assert_eq!(SampleId::from_string("42"), Ok(id));
    }

    #[test]
    fn from_string_rejects_garbage() {
        assert!(SampleId::from_string("abc").is_err());
    }
}
