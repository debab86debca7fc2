use std::{
    io::{BufRead, Write, stdin, stdout},
    path::Path,
};

use miette::{IntoDiagnostic, Result, miette};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use skiff_db::{RecordStore, Row, fsops, render_table};

/// Shell commands recognized at the prompt.
///
/// Command words are case-insensitive; arguments are prompted for one at a
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, EnumIter)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
enum Command {
    CreateDir,
    RenameDir,
    DeleteDir,
    ListDir,
    CreateTable,
    RenameTable,
    DropTable,
    Schema,
    Insert,
    Read,
    Update,
    Delete,
    Show,
    Cat,
    Help,
    Exit,
}

impl Command {
    fn describe(self) -> &'static str {
        match self {
            Self::CreateDir => "create a workspace directory",
            Self::RenameDir => "rename a workspace directory",
            Self::DeleteDir => "delete a workspace directory",
            Self::ListDir => "list the contents of a directory",
            Self::CreateTable => "create an empty table file",
            Self::RenameTable => "rename a table file",
            Self::DropTable => "delete a whole table",
            Self::Schema => "write a header line of column names",
            Self::Insert => "insert a record, keyed automatically",
            Self::Read => "look up one record by key",
            Self::Update => "replace a record's values by key",
            Self::Delete => "delete records whose key starts with a character",
            Self::Show => "render a table as an aligned grid",
            Self::Cat => "dump a file's raw content",
            Self::Help => "show this command list",
            Self::Exit => "leave the shell",
        }
    }
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(false)
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .build(),
        )
    }))
    .into_diagnostic()?;
    miette::set_panic_hook();

    let mut stdin = stdin().lock();
    let mut stdout = stdout().lock();

    println!("skiff-db shell. Type 'help' for commands, 'exit' to quit.");

    let mut buf = String::new();
    loop {
        write!(stdout, "skiff> ").into_diagnostic()?;
        stdout.flush().into_diagnostic()?;

        buf.clear();
        if stdin.read_line(&mut buf).into_diagnostic()? == 0 {
            break;
        }

        let input = buf.trim();
        if input.is_empty() {
            continue;
        }

        let Ok(command) = input.parse::<Command>() else {
            println!("Unknown command: {input}. Type 'help' for the command list.");
            continue;
        };

        if command == Command::Exit {
            break;
        }

        if let Err(report) = run(command, &mut stdin, &mut stdout) {
            println!("{report:?}");
        }
    }

    println!("Exiting skiff");

    Ok(())
}

fn run(command: Command, stdin: &mut impl BufRead, stdout: &mut impl Write) -> Result<()> {
    match command {
        Command::CreateDir => {
            let name = prompt(stdin, stdout, "Directory name")?;
            if !fsops::is_valid_dir_name(&name) {
                return Err(miette!("Directory name should start with an alphabet."));
            }
            if fsops::create_dir(Path::new(&name))? {
                println!("Directory \"{name}\" created successfully.");
            } else {
                println!("Directory \"{name}\" already exists.");
            }
        }
        Command::RenameDir => {
            let old_name = prompt(stdin, stdout, "Old directory name")?;
            let new_name = prompt(stdin, stdout, "New directory name")?;
            let new_path = fsops::rename_dir(Path::new(&old_name), &new_name)?;
            println!(
                "Directory \"{old_name}\" renamed to \"{}\" successfully.",
                new_path.display()
            );
        }
        Command::DeleteDir => {
            let name = prompt(stdin, stdout, "Directory name to delete")?;
            fsops::delete_dir(Path::new(&name))?;
            println!("Directory \"{name}\" deleted successfully.");
        }
        Command::ListDir => {
            let name = prompt(stdin, stdout, "Directory name to list")?;
            let entries = fsops::list_dir(Path::new(&name))?;
            println!("Contents of directory \"{name}\":");
            for entry in entries {
                println!("{entry}");
            }
        }
        Command::CreateTable => {
            let dir = prompt(stdin, stdout, "Directory name")?;
            let table = prompt(stdin, stdout, "Table name")?;
            let path = fsops::create_table_file(Path::new(&dir), &table)?;
            println!("File \"{}\" created successfully.", path.display());
        }
        Command::RenameTable => {
            let dir = prompt(stdin, stdout, "Directory name")?;
            let old_name = prompt(stdin, stdout, "Old file name")?;
            let new_name = prompt(stdin, stdout, "New file name")?;
            let new_path = fsops::rename_file(Path::new(&dir), &old_name, &new_name)?;
            println!(
                "File \"{old_name}\" renamed to \"{}\" successfully.",
                new_path.display()
            );
        }
        Command::DropTable => {
            let dir = prompt(stdin, stdout, "Directory name")?;
            let table = prompt(stdin, stdout, "Table name to delete")?;
            RecordStore::new(&dir).drop_table(&table)?;
            println!("Table \"{table}\" deleted successfully.");
        }
        Command::Schema => {
            let dir = prompt(stdin, stdout, "Directory name")?;
            let table = prompt(stdin, stdout, "Table name")?;
            let columns = prompt_fields(stdin, stdout, "Column names (comma separated)")?;
            RecordStore::new(&dir).create_schema(&table, &columns)?;
            println!("Schema written to table \"{table}\" successfully.");
        }
        Command::Insert => {
            let dir = prompt(stdin, stdout, "Directory name")?;
            let table = prompt(stdin, stdout, "Table name")?;
            let fields = prompt_fields(stdin, stdout, "Record values (comma separated)")?;
            let key = RecordStore::new(&dir).insert(&table, &fields)?;
            println!("Record {key} written to table \"{table}\" successfully.");
        }
        Command::Read => {
            let dir = prompt(stdin, stdout, "Directory name")?;
            let table = prompt(stdin, stdout, "Table name")?;
            let key = prompt(stdin, stdout, "Record key")?;
            let record = RecordStore::new(&dir).read_by_key(&table, &key)?;
            println!("{}", render_table(&[record], false));
        }
        Command::Update => {
            let dir = prompt(stdin, stdout, "Directory name")?;
            let table = prompt(stdin, stdout, "Table name")?;
            let key = prompt(stdin, stdout, "Record key")?;
            let fields = prompt_fields(stdin, stdout, "New values (comma separated)")?;
            RecordStore::new(&dir).update_by_key(&table, &key, &fields)?;
            println!("Record {key} updated successfully.");
        }
        Command::Delete => {
            let dir = prompt(stdin, stdout, "Directory name")?;
            let table = prompt(stdin, stdout, "Table name")?;
            let prefix_input = prompt(stdin, stdout, "Key prefix (single character)")?;
            let prefix = prefix_input
                .chars()
                .next()
                .ok_or_else(|| miette!("Please enter a key prefix."))?;
            let removed = RecordStore::new(&dir).delete_by_key_prefix(&table, prefix)?;
            println!("{removed} record(s) deleted.");
        }
        Command::Show => {
            let dir = prompt(stdin, stdout, "Directory name")?;
            let table = prompt(stdin, stdout, "Table name")?;
            let data = RecordStore::new(&dir).dump_table(&table)?;
            if data.header.is_empty() && data.rows.is_empty() {
                println!("Table \"{table}\" is empty.");
            } else {
                let mut rows = vec![Row::new(data.header)];
                rows.extend(data.rows);
                println!("{}", render_table(&rows, true));
            }
        }
        Command::Cat => {
            let dir = prompt(stdin, stdout, "Directory name")?;
            let file_name = prompt(stdin, stdout, "File name")?;
            let content = fsops::read_file_content(&Path::new(&dir).join(&file_name))?;
            println!("Content of file \"{file_name}\":");
            println!("{content}");
        }
        Command::Help => {
            println!("Commands:");
            for command in Command::iter() {
                println!("  {command: <14} {}", command.describe());
            }
        }
        Command::Exit => {}
    }

    Ok(())
}

fn prompt(stdin: &mut impl BufRead, stdout: &mut impl Write, label: &str) -> Result<String> {
    write!(stdout, "{label}: ").into_diagnostic()?;
    stdout.flush().into_diagnostic()?;

    let mut buf = String::new();
    stdin.read_line(&mut buf).into_diagnostic()?;

    let value = buf.trim().to_string();
    if value.is_empty() {
        return Err(miette!("Please enter a value for \"{label}\"."));
    }

    Ok(value)
}

fn prompt_fields(
    stdin: &mut impl BufRead,
    stdout: &mut impl Write,
    label: &str,
) -> Result<Vec<String>> {
    let raw = prompt(stdin, stdout, label)?;
    Ok(raw.split(',').map(|field| field.trim().to_string()).collect())
}
