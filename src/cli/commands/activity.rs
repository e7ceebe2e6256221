//! Activity command implementation
//!
//! Edits the teaching flow of a stored record. Sections and activities are
//! numbered from 1, as in the rendered document. Keys the flow model does
//! not know about are written back unchanged.

use super::{fail, open_library, settings, EXIT_CONFIG, EXIT_OK};
use crate::adapters::library::LibraryStore;
use crate::core::canonical::{canonicalize_record, document_with_flow};
use crate::domain::{Activity, LecternError, LessonRecord, MoveDirection, Result, SECTION_COUNT};
use clap::{Args, Subcommand};

/// Arguments for the activity command
#[derive(Args, Debug)]
pub struct ActivityArgs {
    #[command(subcommand)]
    pub action: ActivityAction,
}

/// Flow edits
#[derive(Subcommand, Debug)]
pub enum ActivityAction {
    /// Append an activity to a section
    Add(AddArgs),
    /// Delete an activity
    Remove(RemoveArgs),
    /// Swap an activity with its neighbour
    Move(MoveArgs),
    /// Change the texts of an activity
    Set(SetArgs),
}

/// Record and section an edit applies to
#[derive(Args, Debug)]
pub struct Target {
    /// Record name
    pub name: String,

    /// Section number (1-5)
    #[arg(short, long)]
    pub section: usize,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    #[command(flatten)]
    pub target: Target,

    /// Teacher activity text
    #[arg(long, default_value = "")]
    pub tea: String,

    /// Student activity text
    #[arg(long, default_value = "")]
    pub stu: String,
}

#[derive(Args, Debug)]
pub struct RemoveArgs {
    #[command(flatten)]
    pub target: Target,

    /// Activity number within the section
    #[arg(short, long)]
    pub index: usize,
}

#[derive(Args, Debug)]
pub struct MoveArgs {
    #[command(flatten)]
    pub target: Target,

    /// Activity number within the section
    #[arg(short, long)]
    pub index: usize,

    /// up or down
    #[arg(short, long)]
    pub direction: String,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    #[command(flatten)]
    pub target: Target,

    /// Activity number within the section
    #[arg(short, long)]
    pub index: usize,

    /// New teacher activity text
    #[arg(long)]
    pub tea: Option<String>,

    /// New student activity text
    #[arg(long)]
    pub stu: Option<String>,
}

impl ActivityArgs {
    /// Execute the activity command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        crate::log_command_start!("activity", name = %self.action.target().name);

        let Some(config) = settings(config_path) else {
            return Ok(EXIT_CONFIG);
        };

        let result = open_library(&config).and_then(|store| self.action.apply(&store));
        match result {
            Ok(message) => {
                println!("✅ {message}");
                Ok(EXIT_OK)
            }
            Err(e) => Ok(fail(&e, "Failed to edit activities")),
        }
    }
}

impl ActivityAction {
    fn target(&self) -> &Target {
        match self {
            ActivityAction::Add(args) => &args.target,
            ActivityAction::Remove(args) => &args.target,
            ActivityAction::Move(args) => &args.target,
            ActivityAction::Set(args) => &args.target,
        }
    }

    /// Applies the edit and saves the record, returning a status line
    pub fn apply(&self, store: &LibraryStore) -> Result<String> {
        let target = self.target();
        let section = section_index(target.section)?;

        let raw = store.read_value(&target.name)?;
        let mut record = canonicalize_record(&raw);

        let (changed, message) = self.edit(&mut record, section)?;
        if changed {
            store.save_value(&target.name, &document_with_flow(&raw, record.flow()))?;
        }
        Ok(message)
    }

    fn edit(&self, record: &mut LessonRecord, section: usize) -> Result<(bool, String)> {
        let title = record.section(section)?.title();
        match self {
            ActivityAction::Add(args) => {
                let index = record.add_activity(section, Activity::new(&args.tea, &args.stu))?;
                Ok((true, format!("Added activity {} to {title}", index + 1)))
            }
            ActivityAction::Remove(args) => {
                record.remove_activity(section, activity_index(args.index)?)?;
                Ok((true, format!("Removed activity {} from {title}", args.index)))
            }
            ActivityAction::Move(args) => {
                let direction = parse_direction(&args.direction)?;
                let moved = record.move_activity(section, activity_index(args.index)?, direction)?;
                let message = if moved {
                    format!("Moved activity {} {} in {title}", args.index, args.direction)
                } else {
                    format!("Activity {} is already at the edge of {title}", args.index)
                };
                Ok((moved, message))
            }
            ActivityAction::Set(args) => {
                if args.tea.is_none() && args.stu.is_none() {
                    return Err(LecternError::Validation(
                        "Give --tea and/or --stu".to_string(),
                    ));
                }
                record.update_activity(
                    section,
                    activity_index(args.index)?,
                    args.tea.clone(),
                    args.stu.clone(),
                )?;
                Ok((true, format!("Updated activity {} in {title}", args.index)))
            }
        }
    }
}

fn section_index(number: usize) -> Result<usize> {
    if (1..=SECTION_COUNT).contains(&number) {
        Ok(number - 1)
    } else {
        Err(LecternError::Validation(format!(
            "Section must be between 1 and {SECTION_COUNT}, got {number}"
        )))
    }
}

fn activity_index(number: usize) -> Result<usize> {
    number
        .checked_sub(1)
        .ok_or_else(|| LecternError::Validation("Activity numbers start at 1".to_string()))
}

fn parse_direction(direction: &str) -> Result<MoveDirection> {
    match direction.trim().to_lowercase().as_str() {
        "up" => Ok(MoveDirection::Up),
        "down" => Ok(MoveDirection::Down),
        other => Err(LecternError::Validation(format!(
            "Unknown direction '{other}'. Use 'up' or 'down'"
        ))),
    }
}
