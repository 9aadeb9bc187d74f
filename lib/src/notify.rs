//! User-visible notifications emitted by store operations

#[cfg(test)]
use mockall::automock;

/// Shown after an item is created
pub const ITEM_CREATED: &str = "Запись добавлена";
/// Shown after a delete request, whether or not an item was removed
pub const ITEM_DELETED: &str = "Запись удалена";
/// Shown when a draft is missing its title or content
pub const FIELDS_REQUIRED: &str = "Заполните все поля";
/// Shown when a custom draft is missing its label under the strict policy
pub const CUSTOM_LABEL_REQUIRED: &str = "Укажите название раздела";
/// Shown after the rules link is saved
pub const RULES_LINK_SAVED: &str = "Ссылка сохранена";

/// Fire-and-forget sink for success and error notifications
#[cfg_attr(test, automock)]
pub trait Notifier {
    /// Reports a successful operation
    fn notify_success(&self, message: &str);
    /// Reports a rejected operation
    fn notify_error(&self, message: &str);
}

/// Notifier that forwards every notification to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify_success(&self, message: &str) {
        log::info!("{message}");
    }

    fn notify_error(&self, message: &str) {
        log::error!("{message}");
    }
}
