use crate::error::Result;
use std::future::Future;

/// Интерфейс сервиса буфера обмена.
///
/// Копирование асинхронное: системные буферы обмена завершают операцию
/// не мгновенно и могут отказать в доступе. Неудачное копирование не
/// влияет на разбор и синхронизацию субтитров.
pub trait ClipboardProvider: Send + Sync {
    /// Копирует текст в буфер обмена
    fn copy_text(&self, text: &str) -> impl Future<Output = Result<()>>;
}
