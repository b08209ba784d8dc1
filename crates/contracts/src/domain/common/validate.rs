use serde::Serialize;

/// Ошибка валидации одного поля формы
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Имя поля черновика
    pub field: &'static str,
    /// Сообщение для отображения рядом с полем
    pub message: String,
}

/// Набор ошибок валидации: не более одного сообщения на поле
///
/// Первая ошибка по полю выигрывает — повторные `push` для того же поля
/// игнорируются, чтобы пользователь видел одно сообщение на поле.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl std::error::Error for ValidationErrors {}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        if self.errors.iter().any(|e| e.field == field) {
            return;
        }
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Превратить накопленные ошибки в `Result`
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation failed")?;
        for e in &self.errors {
            write!(f, "; {}: {}", e.field, e.message)?;
        }
        Ok(())
    }
}

/// Трейт декларативной валидации черновика формы
pub trait Validate {
    /// Проверить все правила; вернуть ошибки по полям, если есть
    fn validate(&self) -> Result<(), ValidationErrors>;
}

/// Композируемые правила валидации полей
pub mod rules {
    use super::ValidationErrors;

    /// Обязательное текстовое поле
    pub fn required(errors: &mut ValidationErrors, field: &'static str, value: &str, message: &str) {
        if value.trim().is_empty() {
            errors.push(field, message);
        }
    }

    /// Обязательное значение (даты и прочие `Option`)
    pub fn required_value<T>(
        errors: &mut ValidationErrors,
        field: &'static str,
        value: &Option<T>,
        message: &str,
    ) {
        if value.is_none() {
            errors.push(field, message);
        }
    }

    /// Минимальная длина строки (в символах)
    pub fn min_len(
        errors: &mut ValidationErrors,
        field: &'static str,
        value: &str,
        min: usize,
        message: &str,
    ) {
        if value.chars().count() < min {
            errors.push(field, message);
        }
    }

    /// Форма email: непустая локальная часть, один `@`, точка в домене
    pub fn email(errors: &mut ValidationErrors, field: &'static str, value: &str, message: &str) {
        if !looks_like_email(value) {
            errors.push(field, message);
        }
    }

    /// Как `email`, но пустое значение допускается
    pub fn email_optional(
        errors: &mut ValidationErrors,
        field: &'static str,
        value: &str,
        message: &str,
    ) {
        if !value.trim().is_empty() && !looks_like_email(value) {
            errors.push(field, message);
        }
    }

    /// Числовое значение в диапазоне `min..=max`
    pub fn range(
        errors: &mut ValidationErrors,
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
        message: &str,
    ) {
        if value < min || value > max {
            errors.push(field, message);
        }
    }

    fn looks_like_email(value: &str) -> bool {
        let value = value.trim();
        let Some((local, domain)) = value.split_once('@') else {
            return false;
        };
        if local.is_empty() || domain.is_empty() {
            return false;
        }
        // Домен должен содержать точку не по краям
        let Some((host, tld)) = domain.rsplit_once('.') else {
            return false;
        };
        !host.is_empty() && !tld.is_empty() && !domain.contains('@') && !value.contains(' ')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_error_per_field_wins() {
        let mut errors = ValidationErrors::new();
        errors.push("name", "Name is required");
        errors.push("name", "Name is too short");
        assert_eq!(errors.errors.len(), 1);
        assert_eq!(errors.message_for("name"), Some("Name is required"));
    }

    #[test]
    fn required_flags_blank_strings() {
        let mut errors = ValidationErrors::new();
        rules::required(&mut errors, "name", "   ", "Name is required");
        rules::required(&mut errors, "head", "Sarah", "Head is required");
        assert_eq!(errors.errors.len(), 1);
        assert_eq!(errors.errors[0].field, "name");
    }

    #[test]
    fn email_rule() {
        let mut errors = ValidationErrors::new();
        rules::email(&mut errors, "email", "john.doe@company.com", "Valid email is required");
        assert!(errors.is_empty());

        for bad in ["", "plain", "a@b", "@company.com", "a b@c.com", "a@", "a@.com"] {
            let mut errors = ValidationErrors::new();
            rules::email(&mut errors, "email", bad, "Valid email is required");
            assert!(!errors.is_empty(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn optional_email_allows_empty() {
        let mut errors = ValidationErrors::new();
        rules::email_optional(&mut errors, "emailAccess", "", "Valid email is required");
        assert!(errors.is_empty());

        rules::email_optional(&mut errors, "emailAccess", "nope", "Valid email is required");
        assert_eq!(errors.message_for("emailAccess"), Some("Valid email is required"));
    }

    #[test]
    fn range_rule() {
        let mut errors = ValidationErrors::new();
        rules::range(&mut errors, "basicSalary", -1, 0, i64::MAX, "Salary must not be negative");
        assert!(!errors.is_empty());
    }
}
