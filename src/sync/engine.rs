use crate::logging::log_trace;
use crate::srt::models::{Subtitle, SubtitleTrack};

/// Тип функции обратного вызова для событий синхронизации
pub type SyncCallback = Box<dyn Fn(&SyncEvent) + Send + 'static>;

/// Событие, порождаемое движком синхронизации на каждом тике
#[derive(Debug, Clone, PartialEq)]
pub enum SyncEvent {
    /// Есть активный субтитр: показать его текст в оверлее
    /// и подсветить соответствующий элемент списка
    Active(Subtitle),
    /// Активного субтитра нет: очистить оверлей и снять подсветку
    Clear,
}

/// Состояние подсветки, которым владеет движок синхронизации
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SyncState {
    /// Диапазон (время начала, время окончания) активного субтитра
    pub active_range: Option<(f64, f64)>,
}

/// Движок синхронизации субтитров с часами воспроизведения
#[derive(Debug, Default)]
pub struct SyncEngine {
    state: SyncState,
}

impl SyncEngine {
    /// Создает новый движок синхронизации
    pub fn new() -> Self {
        Self {
            state: SyncState::default(),
        }
    }

    /// Возвращает текущее состояние подсветки
    pub fn state(&self) -> &SyncState {
        &self.state
    }

    /// Находит активный субтитр для момента времени.
    ///
    /// Дорожка просматривается в исходном порядке, выигрывает первый
    /// субтитр, чей диапазон содержит момент времени (обе границы
    /// включительны). При пересечении диапазонов последующие кандидаты
    /// не рассматриваются.
    pub fn active_at(track: &SubtitleTrack, current_time: f64) -> Option<&Subtitle> {
        track.iter().find(|subtitle| subtitle.contains(current_time))
    }

    /// Обрабатывает один тик часов воспроизведения.
    ///
    /// Активный субтитр выводится заново из дорожки и момента времени
    /// на каждом тике; движок не полагается на то, какой субтитр был
    /// активен прежде.
    pub fn on_tick(&mut self, current_time: f64, track: &SubtitleTrack) -> SyncEvent {
        let active = Self::active_at(track, current_time);
        self.state.active_range = active.map(|subtitle| subtitle.range());

        match active {
            Some(subtitle) => {
                log_trace(&format!(
                    "Тик {:.3} с: активен субтитр {:.3} - {:.3}",
                    current_time, subtitle.start_time, subtitle.end_time
                ));
                SyncEvent::Active(subtitle.clone())
            }
            None => {
                log_trace(&format!("Тик {:.3} с: активных субтитров нет", current_time));
                SyncEvent::Clear
            }
        }
    }

    /// Сбрасывает состояние подсветки. Вызывается при загрузке
    /// новой дорожки: прежняя подсветка к ней не относится.
    pub fn reset(&mut self) {
        self.state = SyncState::default();
    }
}
