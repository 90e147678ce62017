// src/logging.rs
//! `log` マクロの出力先をブラウザの console にするロガー。
//!
//! wasm の start フックから一度だけ `init` を呼ぶ。ネイティブのテストでは何も登録しないので、
//! `log::info!` などは全部素通りになる。

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::JsValue;
use web_sys::console;

pub struct ConsoleLogger {
    level: LevelFilter,
}

static LOGGER: ConsoleLogger = ConsoleLogger { level: LevelFilter::Debug };

impl ConsoleLogger {
    fn format(record: &Record) -> String {
        match record.module_path() {
            Some(module) => format!("[{}] {}: {}", record.level(), module, record.args()),
            None => format!("[{}] {}", record.level(), record.args()),
        }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&Self::format(record));
        match record.level() {
            Level::Error => console::error_1(&line),
            Level::Warn => console::warn_1(&line),
            Level::Info => console::info_1(&line),
            Level::Debug | Level::Trace => console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// ロガーを登録する。2 回目以降は `SetLoggerError` になる。
pub fn init(max_level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(max_level.min(LOGGER.level));
    Ok(())
}
