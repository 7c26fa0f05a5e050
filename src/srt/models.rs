use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Структура данных для представления субтитра
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subtitle {
    /// Время начала показа в секундах
    pub start_time: f64,
    /// Время окончания показа в секундах
    pub end_time: f64,
    /// Текст субтитра одной строкой
    pub text: String,
}

impl Subtitle {
    /// Создает новый субтитр
    pub fn new(start_time: f64, end_time: f64, text: String) -> Self {
        Self {
            start_time,
            end_time,
            text,
        }
    }

    /// Возвращает длительность показа субтитра в секундах
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }

    /// Проверяет, попадает ли момент времени в диапазон показа.
    /// Обе границы диапазона включительны.
    pub fn contains(&self, time: f64) -> bool {
        self.start_time <= time && time <= self.end_time
    }

    /// Возвращает пару (время начала, время окончания),
    /// идентифицирующую субтитр в пределах дорожки
    pub fn range(&self) -> (f64, f64) {
        (self.start_time, self.end_time)
    }
}

/// Дорожка субтитров в том порядке, в котором они были прочитаны
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubtitleTrack {
    /// Субтитры
    pub subtitles: Vec<Subtitle>,
}

impl SubtitleTrack {
    /// Создает новую пустую дорожку субтитров
    pub fn new() -> Self {
        Self {
            subtitles: Vec::new(),
        }
    }

    /// Добавляет субтитр в дорожку
    pub fn add(&mut self, subtitle: Subtitle) {
        self.subtitles.push(subtitle);
    }

    /// Возвращает количество субтитров в дорожке
    pub fn len(&self) -> usize {
        self.subtitles.len()
    }

    /// Проверяет, пуста ли дорожка
    pub fn is_empty(&self) -> bool {
        self.subtitles.is_empty()
    }

    /// Возвращает итератор по субтитрам
    pub fn iter(&self) -> impl Iterator<Item = &Subtitle> {
        self.subtitles.iter()
    }

    /// Проверяет, что времена начала не убывают и каждый субтитр
    /// заканчивается не раньше, чем начинается. Парсер этот порядок
    /// не навязывает и дорожку не переставляет, поэтому проверка
    /// предназначена для диагностики и тестов.
    pub fn is_well_ordered(&self) -> bool {
        self.subtitles
            .windows(2)
            .all(|pair| pair[0].start_time <= pair[1].start_time)
            && self.subtitles.iter().all(|s| s.start_time <= s.end_time)
    }

    /// Возвращает общую длительность дорожки в секундах
    pub fn total_duration(&self) -> f64 {
        if self.subtitles.is_empty() {
            return 0.0;
        }

        let min_start = self
            .subtitles
            .iter()
            .map(|s| s.start_time)
            .fold(f64::INFINITY, f64::min);

        let max_end = self
            .subtitles
            .iter()
            .map(|s| s.end_time)
            .fold(0.0, f64::max);

        max_end - min_start
    }

    /// Сериализует дорожку в JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Восстанавливает дорожку из JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl std::ops::Index<usize> for SubtitleTrack {
    type Output = Subtitle;

    fn index(&self, index: usize) -> &Self::Output {
        &self.subtitles[index]
    }
}
