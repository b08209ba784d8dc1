use super::EntityId;

/// Трейт для сущности, живущей в коллекции страницы
///
/// Определяет идентификатор и имена для UI-сообщений. Шаблоны
/// уведомлений собираются из `element_name()` и глаголов действий.
pub trait Entity {
    /// Тип идентификатора сущности
    type Id: EntityId;

    /// Получить ID записи
    fn id(&self) -> Self::Id;

    /// Имя элемента для UI (единственное число, например, "Employee")
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число, например, "Employees")
    fn list_name() -> &'static str;

    // ============================================================================
    // Глаголы для шаблонов уведомлений
    // ============================================================================

    /// Глагол для уведомления о создании ("created", "added", "posted"...)
    fn create_verb() -> &'static str {
        "created"
    }

    /// Глагол для уведомления об обновлении
    fn update_verb() -> &'static str {
        "updated"
    }

    /// Глагол для уведомления об удалении
    fn delete_verb() -> &'static str {
        "deleted"
    }
}
