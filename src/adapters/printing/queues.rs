//! Print queue discovery through the CUPS command-line tools

use super::runner::CommandRunner;
use crate::config::PrintingConfig;
use regex::Regex;
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::LazyLock;

/// `device for NAME: URI`, any case
static DEVICE_LINE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)^device for (.+?):").ok());

/// Status text that follows a queue name in `lpstat` output (zh and en)
const STATUS_MARKERS: [&str; 8] = [
    " 正在",
    "正在",
    " 接受",
    "接受",
    " accepting",
    " is ",
    " enabled",
    " disabled",
];

/// Known queues and the system default
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrinterList {
    /// Sorted, deduplicated; contains the default when there is one
    pub names: Vec<String>,
    pub default: Option<String>,
}

impl PrinterList {
    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.default.is_none()
    }

    /// `preferred` if given, then the default, then the first queue
    pub fn choose(&self, preferred: Option<&str>) -> Option<String> {
        preferred
            .map(clean_printer_name)
            .filter(|p| !p.is_empty())
            .or_else(|| self.default.clone())
            .or_else(|| self.names.first().cloned())
    }
}

/// Reduces an `lpstat` line or a user-typed name to the bare queue name
///
/// ```
/// use lectern::adapters::printing::clean_printer_name;
///
/// assert_eq!(clean_printer_name("device for Office_HP: ipp://10.0.0.5"), "Office_HP");
/// assert_eq!(clean_printer_name("Office_HP accepting requests since Mon"), "Office_HP");
/// assert_eq!(clean_printer_name("Office_HP 正在接受请求"), "Office_HP");
/// ```
pub fn clean_printer_name(name: &str) -> String {
    let mut name = name.trim();

    if let Some(device) = device_name(name) {
        name = device;
    }

    for marker in STATUS_MARKERS {
        if let Some(i) = name.find(marker) {
            if i > 0 {
                name = name[..i].trim();
                break;
            }
        }
    }

    if let Some((head, _)) = name.split_once(':') {
        name = head.trim();
    }

    name.to_string()
}

/// Queue name from a `device for NAME: URI` line
fn device_name(line: &str) -> Option<&str> {
    let captures = DEVICE_LINE.as_ref()?.captures(line)?;
    let name = captures.get(1)?.as_str().trim();
    (!name.is_empty()).then_some(name)
}

/// Queues from `lpstat -v`
pub fn parse_devices(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| device_name(line.trim()))
        .map(str::to_string)
        .collect()
}

/// Queues from `lpstat -a`: the first word of each line
pub fn parse_accepting(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(clean_printer_name)
        .collect()
}

/// Queues from `lpstat -p`: `printer NAME is idle...`
pub fn parse_printer_lines(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| line.to_lowercase().starts_with("printer "))
        .filter_map(|line| line.split_whitespace().nth(1))
        .map(str::to_string)
        .collect()
}

/// Queues from `lpoptions`: the token after each `dest` or `default`
pub fn parse_lpoptions(output: &str) -> Vec<String> {
    let tokens: Vec<&str> = output.split_whitespace().collect();
    tokens
        .windows(2)
        .filter(|pair| pair[0] == "dest" || pair[0] == "default")
        .map(|pair| pair[1].to_string())
        .collect()
}

/// Default queue from `lpstat -d`: the text after the first colon
pub fn parse_default(output: &str) -> Option<String> {
    let (_, tail) = output.split_once(':')?;
    let name = clean_printer_name(tail);
    (!name.is_empty()).then_some(name)
}

/// Enumerates queues
///
/// `lpstat -v` is tried first; `lpstat -a` and `lpstat -p` only when it
/// names nothing. `lpoptions` destinations are always added. Tools that
/// cannot be run contribute nothing.
pub fn list_printers<R>(runner: &R, config: &PrintingConfig) -> PrinterList
where
    R: CommandRunner + ?Sized,
{
    let lpstat = Path::new(&config.lpstat_path);

    let mut found: Vec<String> = parse_devices(&capture(runner, lpstat, &["-v"]));
    if found.is_empty() {
        found.extend(parse_accepting(&capture(runner, lpstat, &["-a"])));
        found.extend(parse_printer_lines(&capture(runner, lpstat, &["-p"])));
    }
    found.extend(parse_lpoptions(&capture(
        runner,
        Path::new(&config.lpoptions_path),
        &[],
    )));

    let default = parse_default(&capture(runner, lpstat, &["-d"]));

    let unique: BTreeSet<String> = found
        .iter()
        .map(|n| clean_printer_name(n))
        .filter(|n| !n.is_empty())
        .collect();
    let mut names: Vec<String> = unique.into_iter().collect();
    if let Some(default) = &default {
        if !names.contains(default) {
            names.push(default.clone());
        }
    }

    tracing::debug!(count = names.len(), default = ?default, "Enumerated print queues");
    PrinterList { names, default }
}

fn capture<R>(runner: &R, program: &Path, args: &[&str]) -> String
where
    R: CommandRunner + ?Sized,
{
    let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
    match runner.run(program, &args) {
        Ok(output) => output.combined(),
        Err(e) => {
            tracing::debug!(program = %program.display(), error = %e, "Queue tool unavailable");
            String::new()
        }
    }
}
