use crate::command::Command;
use lru_cache::LruCache;
use std::io::Write;

const ABSENT: &str = "(absent)";

pub struct Session {
    cache: LruCache<String, String>,
}

impl Session {
    pub fn new(cache: LruCache<String, String>) -> Self {
        Self { cache }
    }

    pub fn get_cache(&self) -> &LruCache<String, String> {
        &self.cache
    }

    pub fn execute(&mut self, command: &Command, output: &mut impl Write) -> std::io::Result<()> {
        match command {
            Command::Put { key, value } => {
                let is_update = self.cache.contains(key.as_str());
                let is_evicting = !is_update && self.cache.len() == self.cache.capacity();
                if is_evicting {
                    if let Some((evicted_key, _)) = self.cache.peek_lru() {
                        log::info!("[lru-demo] put '{}' evicts '{}'", key, evicted_key);
                    }
                }
                self.cache.put(key.clone(), value.clone());
            },
            Command::Get { key } => {
                let value = self.cache.get(key.as_str()).map(String::as_str);
                writeln!(output, "{}", value.unwrap_or(ABSENT))?;
            },
            Command::Peek { key } => {
                let value = self.cache.peek(key.as_str()).map(String::as_str);
                writeln!(output, "{}", value.unwrap_or(ABSENT))?;
            },
            Command::Remove { key } => {
                writeln!(output, "{}", self.cache.remove(key.as_str()))?;
            },
            Command::Len => {
                writeln!(output, "{}", self.cache.len())?;
            },
            Command::Dump => {
                let entries: Vec<String> = self.cache
                    .iter()
                    .map(|(key, value)| format!("{}={}", key, value))
                    .collect();
                writeln!(output, "{}", entries.join(" "))?;
            },
            Command::Clear => {
                self.cache.clear();
            },
        }
        Ok(())
    }

    pub fn execute_all(&mut self, commands: &[Command], output: &mut impl Write) -> std::io::Result<()> {
        for command in commands {
            self.execute(command, output)?;
        }
        Ok(())
    }
}
