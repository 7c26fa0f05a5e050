use crate::error::Result;
use crate::logging::log_debug;
use crate::srt::models::{Subtitle, SubtitleTrack};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::io::BufRead;
use std::path::Path;

/// Регулярное выражение для строки временного диапазона SRT:
/// `HH:MM:SS,mmm --> HH:MM:SS,mmm`
static TIMESTAMP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{2}):(\d{2}):(\d{2}),(\d{3}) --> (\d{2}):(\d{2}):(\d{2}),(\d{3})")
        .expect("valid timestamp regex")
});

/// Парсер SRT файлов
pub struct SrtParser;

impl SrtParser {
    /// Парсит SRT файл и возвращает дорожку субтитров
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<SubtitleTrack> {
        let content = fs::read_to_string(path)?;
        Ok(Self::parse_str(&content))
    }

    /// Парсит SRT из любого источника, реализующего BufRead
    pub fn parse_reader<R: BufRead>(mut reader: R) -> Result<SubtitleTrack> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Ok(Self::parse_str(&content))
    }

    /// Парсит SRT из строки и возвращает дорожку субтитров.
    ///
    /// Парсер намеренно снисходителен: строки, не подходящие ни под один
    /// шаблон, не останавливают разбор, а блоки без текста не попадают в
    /// дорожку. Худший исход для любого входа - пустая дорожка.
    pub fn parse_str(content: &str) -> SubtitleTrack {
        let mut track = SubtitleTrack::new();

        let mut current_range: Option<(f64, f64)> = None;
        let mut current_text = String::new();

        for line in content.lines() {
            if let Some(captures) = TIMESTAMP_RE.captures(line) {
                // Новая строка диапазона закрывает предыдущий блок,
                // если в нем накопился текст
                if let Some((start_time, end_time)) = current_range {
                    if !current_text.is_empty() {
                        track.add(Subtitle::new(start_time, end_time, current_text.clone()));
                    }
                }
                current_text.clear();

                let start_time = Self::convert_time_to_seconds(
                    &captures[1],
                    &captures[2],
                    &captures[3],
                    &captures[4],
                );
                let end_time = Self::convert_time_to_seconds(
                    &captures[5],
                    &captures[6],
                    &captures[7],
                    &captures[8],
                );
                current_range = Some((start_time, end_time));
            } else if Self::is_index_line(line) {
                // Порядковый номер блока данных не несет
                continue;
            } else {
                let trimmed = line.trim();
                // Пустые строки блок не закрывают: его закрывает только
                // следующая строка диапазона или конец входа. Текст до
                // первой строки диапазона отнести не к чему.
                if trimmed.is_empty() || current_range.is_none() {
                    continue;
                }
                // Строки текста одного блока склеиваются через пробел
                if !current_text.is_empty() {
                    current_text.push(' ');
                }
                current_text.push_str(trimmed);
            }
        }

        // Конец входа закрывает последний блок
        if let Some((start_time, end_time)) = current_range {
            if !current_text.is_empty() {
                track.add(Subtitle::new(start_time, end_time, current_text));
            }
        }

        log_debug(&format!("Разобрано субтитров: {}", track.len()));
        track
    }

    /// Проверяет, является ли строка порядковым номером блока:
    /// непустая строка целиком из цифр
    fn is_index_line(line: &str) -> bool {
        !line.is_empty() && line.bytes().all(|b| b.is_ascii_digit())
    }

    /// Преобразует группы временной метки `HH:MM:SS,mmm` в секунды.
    /// Группы приходят из регулярного выражения и состоят из цифр,
    /// поэтому разбор чисел не может не удаться.
    fn convert_time_to_seconds(hours: &str, minutes: &str, seconds: &str, milliseconds: &str) -> f64 {
        let hours: u32 = hours.parse().unwrap_or(0);
        let minutes: u32 = minutes.parse().unwrap_or(0);
        let seconds: u32 = seconds.parse().unwrap_or(0);
        let milliseconds: u32 = milliseconds.parse().unwrap_or(0);

        (hours as f64) * 3600.0
            + (minutes as f64) * 60.0
            + (seconds as f64)
            + (milliseconds as f64) / 1000.0
    }
}
