pub mod clipboard;
pub mod error;
pub mod list;
pub mod logging;
pub mod player;
pub mod srt;
pub mod sync;

pub use clipboard::ClipboardProvider;
pub use error::{Error, Result, ErrorType};
pub use list::{ListEntry, SubtitleList};
pub use logging::{
    setup_logging, setup_test_logging, log_error, log_warning, log_info, log_debug, log_trace
};
pub use player::PlaybackControl;
pub use srt::{Subtitle, SubtitleTrack, SrtParser};
pub use sync::{SyncCallback, SyncEngine, SyncEvent, SyncState};

use std::path::Path;

/// Настройки синхронизации субтитров с воспроизведением
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Запускать ли воспроизведение при выборе субтитра из списка
    pub autoplay_on_select: bool,

    /// Прокручивать ли список к текущему субтитру
    pub scroll_to_current: bool,

    /// Уровень логирования
    pub log_level: log::LevelFilter,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            autoplay_on_select: true,
            scroll_to_current: true,
            log_level: log::LevelFilter::Info,
        }
    }
}

/// Основной интерфейс синхронизации SRT субтитров с воспроизведением видео
pub struct SrtSync {
    options: SyncOptions,
    track: SubtitleTrack,
    list: SubtitleList,
    engine: SyncEngine,
    overlay: Option<String>,
    callback: Option<SyncCallback>,
}

impl SrtSync {
    /// Создает новый экземпляр SrtSync с заданными настройками
    pub fn new(options: SyncOptions) -> Self {
        #[cfg(test)]
        {
            setup_test_logging(options.log_level);
        }
        #[cfg(not(test))]
        {
            setup_logging(options.log_level);
        }

        log_info(&format!("Создан новый экземпляр SrtSync с настройками: {:?}", options));

        Self {
            options,
            track: SubtitleTrack::new(),
            list: SubtitleList::new(),
            engine: SyncEngine::new(),
            overlay: None,
            callback: None,
        }
    }

    /// Создает новый экземпляр SrtSync с настройками по умолчанию
    pub fn default() -> Self {
        Self::new(SyncOptions::default())
    }

    /// Устанавливает функцию обратного вызова для событий синхронизации
    pub fn with_sync_callback(mut self, callback: SyncCallback) -> Self {
        log_debug("Установлена функция обратного вызова для событий синхронизации");
        self.callback = Some(callback);
        self
    }

    /// Устанавливает запуск воспроизведения при выборе субтитра
    pub fn with_autoplay_on_select(mut self, autoplay_on_select: bool) -> Self {
        log_debug(&format!("Установлен автозапуск при выборе: {}", autoplay_on_select));
        self.options.autoplay_on_select = autoplay_on_select;
        self
    }

    /// Устанавливает прокрутку списка к текущему субтитру
    pub fn with_scroll_to_current(mut self, scroll_to_current: bool) -> Self {
        log_debug(&format!("Установлена прокрутка к текущему субтитру: {}", scroll_to_current));
        self.options.scroll_to_current = scroll_to_current;
        self
    }

    /// Загружает дорожку субтитров из текста SRT.
    ///
    /// Прежняя дорожка целиком заменяется новой: список строится заново,
    /// состояние подсветки и оверлей сбрасываются. Возвращает количество
    /// загруженных субтитров.
    pub fn load_subtitles(&mut self, srt_text: &str) -> usize {
        let track = SrtParser::parse_str(srt_text);

        if track.is_empty() {
            log_warning("В загруженном тексте не найдено ни одного субтитра");
        } else {
            log_info(&format!(
                "Загружено субтитров: {}, длительность дорожки: {:.2} с",
                track.len(),
                track.total_duration()
            ));
        }

        self.list = SubtitleList::build(&track);
        self.engine.reset();
        self.overlay = None;
        self.track = track;
        self.track.len()
    }

    /// Загружает дорожку субтитров из файла SRT
    pub async fn load_subtitles_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        log_info(&format!(
            "Загрузка субтитров из файла: {}",
            path.as_ref().display()
        ));
        let content = tokio::fs::read_to_string(path).await?;
        Ok(self.load_subtitles(&content))
    }

    /// Обрабатывает одно изменение позиции воспроизведения.
    ///
    /// Вызывается приложением на каждом уведомлении плеера о смене
    /// времени. Обновляет оверлей и подсветку списка и уведомляет
    /// функцию обратного вызова. Возвращает индекс элемента, к которому
    /// следует прокрутить список, если прокрутка включена в настройках.
    pub fn on_time_update(&mut self, current_time: f64) -> Option<usize> {
        let event = self.engine.on_tick(current_time, &self.track);

        self.overlay = match &event {
            SyncEvent::Active(subtitle) => Some(subtitle.text.clone()),
            SyncEvent::Clear => None,
        };

        let matched = self.list.apply(&event);

        if let Some(callback) = &self.callback {
            callback(&event);
        }

        if self.options.scroll_to_current {
            matched
        } else {
            None
        }
    }

    /// Выбирает субтитр из списка: помечает его выбранным, перематывает
    /// плеер к началу субтитра и при включенном автозапуске начинает
    /// воспроизведение. Подсветку текущего элемента движок подтвердит
    /// на ближайшем тике.
    pub fn select_entry<P: PlaybackControl>(&mut self, index: usize, player: &mut P) -> Result<()> {
        let start_time = self.list.select(index)?;

        log_debug(&format!(
            "Перемотка на {:.3} с по выбору субтитра {}",
            start_time, index
        ));
        player.seek(start_time);

        if self.options.autoplay_on_select {
            player.play();
        }

        Ok(())
    }

    /// Копирует текст субтитра в буфер обмена.
    ///
    /// Неудача копирования не затрагивает состояние синхронизации:
    /// ошибка логируется и возвращается только для уведомления
    /// пользователя.
    pub async fn copy_entry<C: ClipboardProvider>(&self, index: usize, clipboard: &C) -> Result<()> {
        let entry = self.list.get(index).ok_or_else(|| {
            Error::InvalidParameters(format!("Нет элемента списка с индексом {}", index))
        })?;

        match clipboard.copy_text(&entry.text).await {
            Ok(()) => {
                log_debug(&format!("Субтитр {} скопирован в буфер обмена", index));
                Ok(())
            }
            Err(e) => log_error(&e, "Не удалось скопировать субтитр в буфер обмена"),
        }
    }

    /// Текст оверлея для текущего момента воспроизведения
    pub fn overlay_text(&self) -> Option<&str> {
        self.overlay.as_deref()
    }

    /// Текущая дорожка субтитров
    pub fn track(&self) -> &SubtitleTrack {
        &self.track
    }

    /// Список субтитров для отображения
    pub fn list(&self) -> &SubtitleList {
        &self.list
    }

    /// Текущее состояние подсветки
    pub fn sync_state(&self) -> &SyncState {
        self.engine.state()
    }
}
