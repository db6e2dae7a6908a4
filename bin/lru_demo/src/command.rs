use thiserror::Error;

#[derive(Clone,Debug,PartialEq,Eq)]
pub enum Command {
    Put { key: String, value: String },
    Get { key: String },
    Peek { key: String },
    Remove { key: String },
    Len,
    Dump,
    Clear,
}

#[derive(Clone,Debug,PartialEq,Eq,Error)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{name}'")]
    UnknownCommand { line: usize, name: String },
    #[error("line {line}: '{name}' expects {expected} argument(s) but got {given}")]
    WrongArgumentCount { line: usize, name: String, expected: usize, given: usize },
}

/// Parses one script line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line_number: usize, line: &str) -> Result<Option<Command>, ScriptError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let mut tokens = line.split_whitespace();
    let name = match tokens.next() {
        Some(name) => name,
        None => return Ok(None),
    };
    let arguments: Vec<&str> = tokens.collect();
    let expect_arguments = |expected: usize| -> Result<(), ScriptError> {
        if arguments.len() != expected {
            return Err(ScriptError::WrongArgumentCount {
                line: line_number,
                name: name.to_string(),
                expected,
                given: arguments.len(),
            });
        }
        Ok(())
    };
    let command = match name {
        "put" => {
            expect_arguments(2)?;
            Command::Put { key: arguments[0].to_string(), value: arguments[1].to_string() }
        },
        "get" => {
            expect_arguments(1)?;
            Command::Get { key: arguments[0].to_string() }
        },
        "peek" => {
            expect_arguments(1)?;
            Command::Peek { key: arguments[0].to_string() }
        },
        "remove" => {
            expect_arguments(1)?;
            Command::Remove { key: arguments[0].to_string() }
        },
        "len" => {
            expect_arguments(0)?;
            Command::Len
        },
        "dump" => {
            expect_arguments(0)?;
            Command::Dump
        },
        "clear" => {
            expect_arguments(0)?;
            Command::Clear
        },
        _ => return Err(ScriptError::UnknownCommand { line: line_number, name: name.to_string() }),
    };
    Ok(Some(command))
}

/// Parses a whole script, numbering lines from 1.
pub fn parse_script(source: &str) -> Result<Vec<Command>, ScriptError> {
    let mut commands = Vec::new();
    for (i, line) in source.lines().enumerate() {
        if let Some(command) = parse_line(i+1, line)? {
            commands.push(command);
        }
    }
    Ok(commands)
}
