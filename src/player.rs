/// Интерфейс управления воспроизведением видео.
///
/// Библиотека плеером не владеет: реализацию предоставляет приложение
/// (видеоэлемент, медиафреймворк). Контракт минимальный - читаемая и
/// устанавливаемая позиция воспроизведения и команда запуска.
pub trait PlaybackControl {
    /// Текущая позиция воспроизведения в секундах
    fn current_time(&self) -> f64;

    /// Перемещает позицию воспроизведения на указанную секунду
    fn seek(&mut self, seconds: f64);

    /// Запускает воспроизведение
    fn play(&mut self);
}
