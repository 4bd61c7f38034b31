use chrono::NaiveDate;
use std::io;

use crate::forms::machine::{MachineForm, create_machine_form, edit_machine_form};
use crate::models::machine::{Machine, MachineStats, MachineStatus};
use crate::pages::common::{ActionOutcome, ConfirmPrompt, LoadState, matches_search};
use crate::services::export::{ExportSink, export_filename, machines_to_csv};
use crate::services::machines::MachineStore;

/// The machines list: fetched collection, in-memory filters, summary
/// counts, the single hosted add/edit form, delete and CSV export.
#[derive(Default)]
pub struct MachinesPage {
    machines: Vec<Machine>,
    pub search: String,
    /// `None` shows every status.
    pub status_filter: Option<MachineStatus>,
    state: LoadState,
    form: Option<MachineForm>,
}

impl MachinesPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn machines(&self) -> &[Machine] {
        &self.machines
    }

    /// Also the retry entry point from the error state.
    pub async fn load<S: MachineStore>(&mut self, store: &S) {
        self.state = LoadState::Loading;
        match store.list().await {
            Ok(machines) => {
                self.machines = machines;
                self.state = LoadState::Ready;
            }
            Err(err) => {
                tracing::error!("Error loading machines: {}", err);
                self.state = LoadState::Error(err.to_string());
            }
        }
    }

    /// Current view of the collection: case-insensitive substring search
    /// over name/model/serial, then the status filter.
    pub fn filtered(&self) -> Vec<&Machine> {
        self.machines
            .iter()
            .filter(|m| {
                self.search.is_empty()
                    || matches_search(&self.search, &[&m.name, &m.model, &m.serial_number])
            })
            .filter(|m| self.status_filter.is_none_or(|status| m.status == status))
            .collect()
    }

    pub fn has_active_filters(&self) -> bool {
        !self.search.is_empty() || self.status_filter.is_some()
    }

    /// Counts over the full collection, not the filtered view.
    pub fn stats(&self) -> MachineStats {
        MachineStats::tally(&self.machines)
    }

    pub fn form(&self) -> Option<&MachineForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut MachineForm> {
        self.form.as_mut()
    }

    pub fn open_create(&mut self) {
        self.form = Some(create_machine_form());
    }

    pub fn open_edit(&mut self, machine: &Machine) {
        self.form = Some(edit_machine_form(machine));
    }

    /// Cancel discards edits without confirmation.
    pub fn close_form(&mut self) {
        self.form = None;
    }

    /// Submit the hosted form; on success it closes and the list reloads.
    /// On failure the form stays open with its error set.
    pub async fn submit_form<S: MachineStore>(&mut self, store: &S) -> bool {
        let Some(form) = self.form.as_mut() else {
            return false;
        };
        if form.submit(store).await {
            self.form = None;
            self.load(store).await;
            true
        } else {
            false
        }
    }

    pub async fn delete<S: MachineStore>(
        &mut self,
        machine: &Machine,
        confirm: &dyn ConfirmPrompt,
        store: &S,
    ) -> ActionOutcome {
        let message = format!("Are you sure you want to delete \"{}\"?", machine.name);
        if !confirm.confirm(&message) {
            return ActionOutcome::Declined;
        }
        match store.delete(&machine.id).await {
            Ok(()) => {
                self.load(store).await;
                ActionOutcome::Completed
            }
            Err(err) => {
                tracing::error!("Error deleting machine: {}", err);
                ActionOutcome::Failed(err.to_string())
            }
        }
    }

    /// Export the currently filtered set as CSV. Returns the filename
    /// written.
    pub fn export(&self, sink: &mut dyn ExportSink, today: NaiveDate) -> io::Result<String> {
        let csv = machines_to_csv(self.filtered());
        let filename = export_filename(today);
        sink.save(&filename, &csv)?;
        Ok(filename)
    }
}
