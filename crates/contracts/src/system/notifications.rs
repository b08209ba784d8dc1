use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Запись уведомления, как её отдаёт API (`GET /tenant-note/`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenantNote {
    /// Идентификатор на стороне сервера; для клиента — непрозрачная строка
    pub id: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_read: bool,
}

impl TenantNote {
    /// Новая непрочитанная запись со сгенерированным id (демо и тесты)
    pub fn new(text: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text: text.into(),
            created_at,
            is_read: false,
        }
    }
}

/// Элемент выпадающего списка уведомлений
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationItem {
    pub id: String,
    /// Первые 50 символов текста, с многоточием при обрезке
    pub title: String,
    pub message: String,
    /// Относительное время ("5 minutes ago")
    pub time: String,
    pub read: bool,
}

impl NotificationItem {
    pub fn from_note(note: &TenantNote, now: DateTime<Utc>) -> Self {
        Self {
            id: note.id.clone(),
            title: truncate_title(&note.text),
            message: note.text.clone(),
            time: format_time_ago(note.created_at, now),
            read: note.is_read,
        }
    }
}

/// Заголовок: первые 50 символов текста, многоточие при обрезке
fn truncate_title(text: &str) -> String {
    let mut chars = text.chars();
    let title: String = chars.by_ref().take(50).collect();
    if chars.next().is_some() {
        format!("{}...", title)
    } else {
        title
    }
}

/// Относительное время от `created` до `now`
pub fn format_time_ago(created: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - created).num_seconds().max(0);
    if seconds < 60 {
        format!("{} seconds ago", seconds)
    } else if seconds < 3600 {
        format!("{} minutes ago", seconds / 60)
    } else if seconds < 86_400 {
        format!("{} hours ago", seconds / 3600)
    } else {
        format!("{} days ago", seconds / 86_400)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn short_text_is_not_truncated() {
        let note = TenantNote::new("Payday is tomorrow", at(0));
        let item = NotificationItem::from_note(&note, at(30));
        assert_eq!(item.title, "Payday is tomorrow");
        assert_eq!(item.time, "30 seconds ago");
        assert!(!item.read);
    }

    #[test]
    fn long_text_gets_ellipsis() {
        let text = "a".repeat(80);
        let note = TenantNote::new(text.clone(), at(0));
        let item = NotificationItem::from_note(&note, at(0));
        assert_eq!(item.title.chars().count(), 53);
        assert!(item.title.ends_with("..."));
        assert_eq!(item.message, text);
    }

    #[test]
    fn time_ago_buckets() {
        assert_eq!(format_time_ago(at(0), at(59)), "59 seconds ago");
        assert_eq!(format_time_ago(at(0), at(120)), "2 minutes ago");
        assert_eq!(format_time_ago(at(0), at(7200)), "2 hours ago");
        assert_eq!(format_time_ago(at(0), at(200_000)), "2 days ago");
        // Часы, идущие вперёд на клиенте, не дают отрицательных значений
        assert_eq!(format_time_ago(at(60), at(0)), "0 seconds ago");
    }
}
