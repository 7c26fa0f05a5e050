use crate::error::{Error, Result};
use crate::logging::log_debug;
use crate::srt::models::SubtitleTrack;
use crate::sync::engine::SyncEvent;

/// Элемент списка субтитров
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    /// Время начала показа в секундах
    pub start_time: f64,
    /// Время окончания показа в секундах
    pub end_time: f64,
    /// Текст субтитра
    pub text: String,
    /// Подсвечен ли элемент как текущий (ставится движком синхронизации)
    pub current: bool,
    /// Выбран ли элемент (ставится по клику пользователя)
    pub selected: bool,
}

impl ListEntry {
    /// Проверяет, что элемент соответствует диапазону события подсветки.
    /// Сравнение точное, без допуска: обе стороны получены одним и тем же
    /// преобразованием из одного и того же исходного текста.
    pub fn matches_range(&self, start_time: f64, end_time: f64) -> bool {
        self.start_time == start_time && self.end_time == end_time
    }
}

/// Список субтитров - проекция дорожки для отображения.
/// Строится один раз при загрузке дорожки, а не на каждом тике.
#[derive(Debug, Clone, Default)]
pub struct SubtitleList {
    entries: Vec<ListEntry>,
}

impl SubtitleList {
    /// Создает пустой список
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Строит список по дорожке субтитров
    pub fn build(track: &SubtitleTrack) -> Self {
        let entries = track
            .iter()
            .map(|subtitle| ListEntry {
                start_time: subtitle.start_time,
                end_time: subtitle.end_time,
                text: subtitle.text.clone(),
                current: false,
                selected: false,
            })
            .collect();

        Self { entries }
    }

    /// Возвращает количество элементов списка
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Проверяет, пуст ли список
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Возвращает элемент списка по индексу
    pub fn get(&self, index: usize) -> Option<&ListEntry> {
        self.entries.get(index)
    }

    /// Возвращает итератор по элементам списка
    pub fn iter(&self) -> impl Iterator<Item = &ListEntry> {
        self.entries.iter()
    }

    /// Индекс текущего (подсвеченного) элемента
    pub fn current_index(&self) -> Option<usize> {
        self.entries.iter().position(|entry| entry.current)
    }

    /// Индекс выбранного элемента
    pub fn selected_index(&self) -> Option<usize> {
        self.entries.iter().position(|entry| entry.selected)
    }

    /// Применяет событие синхронизации к списку.
    ///
    /// Для `SyncEvent::Active` текущим помечается элемент, чей диапазон
    /// точно совпадает с диапазоном события, с остальных подсветка
    /// снимается; возвращается индекс подсвеченного элемента, к которому
    /// вызывающая сторона может прокрутить список. Для `SyncEvent::Clear`
    /// подсветка снимается со всех элементов.
    ///
    /// Пометка выбранного элемента событиями не затрагивается.
    pub fn apply(&mut self, event: &SyncEvent) -> Option<usize> {
        match event {
            SyncEvent::Active(subtitle) => {
                let mut matched = None;
                for (index, entry) in self.entries.iter_mut().enumerate() {
                    entry.current = entry.matches_range(subtitle.start_time, subtitle.end_time);
                    if entry.current && matched.is_none() {
                        matched = Some(index);
                    }
                }
                matched
            }
            SyncEvent::Clear => {
                for entry in &mut self.entries {
                    entry.current = false;
                }
                None
            }
        }
    }

    /// Помечает элемент выбранным и возвращает время начала его субтитра -
    /// позицию, к которой следует перемотать воспроизведение. Пометка
    /// снимается с прежде выбранного элемента и сохраняется до следующего
    /// выбора.
    pub fn select(&mut self, index: usize) -> Result<f64> {
        if index >= self.entries.len() {
            return Err(Error::InvalidParameters(format!(
                "Нет элемента списка с индексом {}",
                index
            )));
        }

        for (i, entry) in self.entries.iter_mut().enumerate() {
            entry.selected = i == index;
        }

        log_debug(&format!("Выбран субтитр с индексом {}", index));
        Ok(self.entries[index].start_time)
    }
}
