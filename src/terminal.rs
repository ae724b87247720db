//! Line-oriented host used by the `zsidebar` binary.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use zsidebar::{ClipboardError, ConfirmRequest, InputRequest, SidebarHost, ViewId, ViewRef};

pub struct TerminalHost {
    roots: Vec<PathBuf>,
    assume_yes: bool,
    inputs: VecDeque<InputRequest>,
    confirms: VecDeque<ConfirmRequest>,
}

impl TerminalHost {
    pub fn new(roots: Vec<PathBuf>, assume_yes: bool) -> Self {
        Self {
            roots,
            assume_yes,
            inputs: VecDeque::new(),
            confirms: VecDeque::new(),
        }
    }

    pub fn take_input(&mut self) -> Option<InputRequest> {
        self.inputs.pop_front()
    }

    pub fn take_confirm(&mut self) -> Option<ConfirmRequest> {
        self.confirms.pop_front()
    }

    /// Reads an answer; an empty line accepts the initial text.
    pub fn ask(&self, request: &InputRequest) -> io::Result<String> {
        let mut stderr = io::stderr();
        write!(stderr, "{} [{}] ", request.caption, request.initial_text)?;
        stderr.flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        let line = line.trim_end_matches(['\r', '\n']);
        if line.is_empty() {
            return Ok(request.initial_text.clone());
        }
        Ok(line.to_string())
    }

    pub fn confirm(&self, request: &ConfirmRequest) -> io::Result<bool> {
        if self.assume_yes {
            return Ok(true);
        }
        let mut stderr = io::stderr();
        write!(stderr, "{} [{}/N] ", request.message, request.ok_title)?;
        stderr.flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        let answer = line.trim().to_ascii_lowercase();
        Ok(answer == "y" || answer == "yes" || answer == request.ok_title.to_ascii_lowercase())
    }
}

impl SidebarHost for TerminalHost {
    fn project_folders(&self) -> Vec<PathBuf> {
        self.roots.clone()
    }

    fn active_file(&self) -> Option<PathBuf> {
        None
    }

    fn view_at(&self, _group: usize, _index: usize) -> Option<PathBuf> {
        None
    }

    fn views(&self) -> Vec<ViewRef> {
        Vec::new()
    }

    fn retarget_view(&mut self, view: ViewId, path: PathBuf) {
        tracing::debug!(view = view.0, path = %path.display(), "retarget ignored");
    }

    fn open_file(&mut self, path: &Path) {
        eprintln!("open {}", path.display());
    }

    fn show_input_panel(&mut self, request: InputRequest) {
        self.inputs.push_back(request);
    }

    fn show_confirm(&mut self, request: ConfirmRequest) {
        self.confirms.push_back(request);
    }

    fn status_message(&mut self, message: &str) {
        eprintln!("{message}");
    }

    fn set_clipboard(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut stdout = io::stdout();
        writeln!(stdout, "{text}").map_err(|e| ClipboardError::SetFailed(e.to_string()))
    }

    fn refresh_folder_list(&mut self) {
        tracing::debug!("refresh folder list");
    }
}
