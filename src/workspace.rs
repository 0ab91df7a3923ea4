//! The application-level state container: catalog, workflows, the canvas
//! editing the active workflow, run state and which panels are showing.

use crate::canvas::{Canvas, Intent, KeyEvent, PointerEvent, WheelEvent};
use crate::catalog::{Agent, AgentDraft, Catalog};
use crate::config::EditorConfig;
use crate::error::{ExportError, FlagStoreError, ImportError, ValidationError, WorkspaceError};
use crate::geometry::Point;
use crate::ids::{Clock, IdGenerator, SystemClock};
use crate::preferences::{FlagStore, ONBOARDING_FLAG};
use crate::run::RunState;
use crate::workflow::{self, Workflow, WorkflowNode, WorkflowTemplate, builtin_templates};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// Windows narrower than this collapse the sidebar.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Modal overlays. At most one is open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    TemplateGallery,
    CreateWorkflow,
    CreateAgent,
    Onboarding,
    TeamSettings,
    HelpCenter,
}

/// Non-modal panels. Each toggles independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panels {
    pub sidebar_collapsed: bool,
    pub agent_panel: bool,
    pub minimap: bool,
    pub fullscreen: bool,
    pub workflow_output: bool,
}

impl Default for Panels {
    fn default() -> Self {
        Self {
            sidebar_collapsed: false,
            agent_panel: true,
            minimap: true,
            fullscreen: false,
            workflow_output: false,
        }
    }
}

pub struct WorkspaceBuilder {
    config: EditorConfig,
    clock: Arc<dyn Clock>,
    catalog: Catalog,
    templates: Vec<WorkflowTemplate>,
}

impl Default for WorkspaceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkspaceBuilder {
    pub fn new() -> Self {
        Self {
            config: EditorConfig::default(),
            clock: Arc::new(SystemClock),
            catalog: Catalog::builtin(),
            templates: builtin_templates(),
        }
    }

    pub fn with_config(mut self, config: EditorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_templates(mut self, templates: Vec<WorkflowTemplate>) -> Self {
        self.templates = templates;
        self
    }

    pub fn build(self) -> Workspace {
        let canvas = Canvas::builder()
            .with_config(self.config)
            .with_clock(self.clock.clone())
            .build();
        Workspace {
            catalog: self.catalog,
            templates: self.templates,
            workflows: vec![Workflow::new(
                "custom-workflow",
                "My First Workflow",
                "Your custom AI workflow",
            )],
            active: 0,
            canvas,
            run: RunState::default(),
            overlay: None,
            panels: Panels::default(),
            ids: IdGenerator::new(self.clock),
        }
    }
}

/// Owns every workflow and exactly one active workflow.
///
/// The workflow list is never empty.
#[derive(Debug)]
pub struct Workspace {
    catalog: Catalog,
    templates: Vec<WorkflowTemplate>,
    workflows: Vec<Workflow>,
    active: usize,
    canvas: Canvas,
    run: RunState,
    overlay: Option<Overlay>,
    panels: Panels,
    ids: IdGenerator,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::builder().build()
    }
}

fn required_name(name: &str) -> Result<String, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        Err(ValidationError::EmptyWorkflowName)
    } else {
        Ok(name.to_string())
    }
}

impl Workspace {
    pub fn builder() -> WorkspaceBuilder {
        WorkspaceBuilder::new()
    }

    // --- Startup ---

    /// Opens the onboarding tour the first time any workspace starts with
    /// this flag store. Returns whether it was opened.
    pub fn startup(&mut self, flags: &mut dyn FlagStore) -> Result<bool, FlagStoreError> {
        if flags.get(ONBOARDING_FLAG)? {
            return Ok(false);
        }
        self.overlay = Some(Overlay::Onboarding);
        flags.set(ONBOARDING_FLAG, true)?;
        info!("showing onboarding");
        Ok(true)
    }

    /// Applies the template named by a `template` URL parameter.
    /// Unknown names are ignored.
    pub fn load_template_param(&mut self, param: Option<&str>) -> Option<String> {
        let param = param?;
        let Some(template) = workflow::find_by_param(&self.templates, param) else {
            debug!(param, "unknown template parameter ignored");
            return None;
        };
        let id = template.id().to_string();
        self.apply_template(&id).ok()
    }

    // --- Catalog ---

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn templates(&self) -> &[WorkflowTemplate] {
        &self.templates
    }

    pub fn add_agent(&mut self, agent: Agent) {
        self.catalog.add(agent);
    }

    /// Submits the "create agent" form. The overlay closes on success.
    pub fn create_agent(&mut self, draft: &AgentDraft) -> Result<Agent, WorkspaceError> {
        let agent = draft.build(&mut self.ids)?;
        info!(agent_id = %agent.id, "agent created");
        self.catalog.add(agent.clone());
        self.close_overlay_if(Overlay::CreateAgent);
        Ok(agent)
    }

    // --- Workflows ---

    pub fn workflows(&self) -> &[Workflow] {
        &self.workflows
    }

    pub fn workflow(&self, id: &str) -> Option<&Workflow> {
        self.workflows.iter().find(|w| w.id == id)
    }

    pub fn active(&self) -> &Workflow {
        &self.workflows[self.active]
    }

    pub fn active_id(&self) -> &str {
        &self.active().id
    }

    fn index_of(&self, id: &str) -> Result<usize, WorkspaceError> {
        self.workflows
            .iter()
            .position(|w| w.id == id)
            .ok_or_else(|| WorkspaceError::WorkflowNotFound(id.to_string()))
    }

    /// Makes `index` active. Selection, gestures and the simulated run
    /// belong to the previously active workflow and are dropped.
    fn activate(&mut self, index: usize) {
        self.canvas.reset_interaction();
        self.run.stop_workflow();
        self.panels.workflow_output = false;
        self.active = index;
    }

    fn push_and_activate(&mut self, workflow: Workflow) -> String {
        let id = workflow.id.clone();
        self.workflows.push(workflow);
        self.activate(self.workflows.len() - 1);
        id
    }

    pub fn select_workflow(&mut self, id: &str) -> Result<(), WorkspaceError> {
        let index = self.index_of(id)?;
        if index != self.active {
            self.activate(index);
        }
        Ok(())
    }

    /// Submits the "create workflow" form.
    pub fn create_workflow(&mut self, name: &str, description: &str) -> Result<String, WorkspaceError> {
        let name = required_name(name)?;
        let workflow = Workflow::new(&self.ids.next("workflow"), &name, description.trim());
        info!(workflow_id = %workflow.id, name = %workflow.name, "workflow created");
        self.close_overlay_if(Overlay::CreateWorkflow);
        Ok(self.push_and_activate(workflow))
    }

    /// Removes a workflow. When it was active, the first remaining workflow
    /// becomes active.
    pub fn delete_workflow(&mut self, id: &str) -> Result<(), WorkspaceError> {
        let index = self.index_of(id)?;
        if self.workflows.len() == 1 {
            return Err(WorkspaceError::LastWorkflow(id.to_string()));
        }
        self.workflows.remove(index);
        if index == self.active {
            self.activate(0);
        } else if index < self.active {
            self.active -= 1;
        }
        info!(workflow_id = %id, "workflow deleted");
        Ok(())
    }

    /// Copies a workflow under `<id>-copy-<millis>`. The active workflow is
    /// unchanged.
    pub fn duplicate_workflow(&mut self, id: &str) -> Result<String, WorkspaceError> {
        let source = self.workflows[self.index_of(id)?].clone();
        let copy = Workflow {
            id: self.ids.next(&format!("{}-copy", source.id)),
            name: format!("{} (Copy)", source.name),
            ..source
        };
        let copy_id = copy.id.clone();
        info!(workflow_id = %id, copy_id = %copy_id, "workflow duplicated");
        self.workflows.push(copy);
        Ok(copy_id)
    }

    pub fn rename_active(&mut self, name: &str) -> Result<(), WorkspaceError> {
        let name = required_name(name)?;
        self.workflows[self.active].name = name;
        Ok(())
    }

    /// Instantiates a template as a new, active workflow.
    pub fn apply_template(&mut self, template_id: &str) -> Result<String, WorkspaceError> {
        let template = self
            .templates
            .iter()
            .find(|t| t.id() == template_id)
            .ok_or_else(|| WorkspaceError::TemplateNotFound(template_id.to_string()))?;
        let workflow = template.instantiate(&mut self.ids);
        info!(template_id, workflow_id = %workflow.id, "template applied");
        self.close_overlay_if(Overlay::TemplateGallery);
        Ok(self.push_and_activate(workflow))
    }

    // --- Import / export ---

    /// Parses a workflow file and makes it active. A workflow with the same
    /// id is replaced, otherwise the import is appended.
    pub fn import_json(&mut self, json: &str) -> Result<String, ImportError> {
        let imported = workflow::import_json(json)?;
        Ok(self.apply_import(imported))
    }

    pub fn import_from_path(&mut self, path: impl AsRef<Path>) -> Result<String, ImportError> {
        let imported = workflow::import_from_path(path)?;
        Ok(self.apply_import(imported))
    }

    fn apply_import(&mut self, imported: Workflow) -> String {
        let id = imported.id.clone();
        info!(workflow_id = %id, nodes = imported.nodes.len(), "workflow imported");
        match self.workflows.iter().position(|w| w.id == id) {
            Some(index) => {
                self.workflows[index] = imported;
                self.activate(index);
            }
            None => {
                self.push_and_activate(imported);
            }
        }
        id
    }

    /// The download name and JSON content of the active workflow.
    pub fn export_active(&self) -> Result<(String, String), ExportError> {
        let active = self.active();
        let json = workflow::export_json(active)?;
        Ok((workflow::export_file_name(&active.name), json))
    }

    pub fn export_active_to_dir(&self, dir: impl AsRef<Path>) -> Result<PathBuf, ExportError> {
        workflow::export_to_dir(self.active(), dir)
    }

    // --- Running ---

    pub fn run_state(&self) -> &RunState {
        &self.run
    }

    /// Starts every node of the active workflow, or stops everything when
    /// the workflow is already running.
    pub fn toggle_run(&mut self) {
        if self.run.is_workflow_running() {
            self.run.stop_workflow();
            self.panels.workflow_output = false;
            info!(workflow_id = %self.active_id(), "workflow stopped");
        } else {
            let ids = self.active().node_ids();
            self.run.start_workflow(ids);
            self.panels.workflow_output = true;
            info!(workflow_id = %self.active_id(), "workflow started");
        }
    }

    // --- Overlays and panels ---

    pub fn overlay(&self) -> Option<Overlay> {
        self.overlay
    }

    /// Opens `overlay`, replacing whichever one was open.
    pub fn open_overlay(&mut self, overlay: Overlay) {
        self.overlay = Some(overlay);
    }

    pub fn close_overlay(&mut self) {
        self.overlay = None;
    }

    fn close_overlay_if(&mut self, overlay: Overlay) {
        if self.overlay == Some(overlay) {
            self.overlay = None;
        }
    }

    pub fn panels(&self) -> &Panels {
        &self.panels
    }

    pub fn panels_mut(&mut self) -> &mut Panels {
        &mut self.panels
    }

    pub fn set_window_width(&mut self, width: f64) {
        if width < MOBILE_BREAKPOINT {
            self.panels.sidebar_collapsed = true;
        }
    }

    /// The properties panel follows the primary selection.
    pub fn properties_open(&self) -> bool {
        self.selected_node().is_some()
    }

    pub fn selected_node(&self) -> Option<&WorkflowNode> {
        let id = self.canvas.selection().primary()?;
        self.active().node(id)
    }

    // --- Canvas ---

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn dispatch(&mut self, intent: Intent) {
        let workflow = &mut self.workflows[self.active];
        self.canvas.dispatch(workflow, &mut self.run, intent);
    }

    pub fn pointer_down(&mut self, event: &PointerEvent) -> Vec<Intent> {
        let workflow = &mut self.workflows[self.active];
        self.canvas.pointer_down(workflow, &mut self.run, event)
    }

    pub fn pointer_move(&mut self, event: &PointerEvent) -> Vec<Intent> {
        let workflow = &mut self.workflows[self.active];
        self.canvas.pointer_move(workflow, &mut self.run, event)
    }

    pub fn pointer_up(&mut self, event: &PointerEvent) -> Vec<Intent> {
        let workflow = &mut self.workflows[self.active];
        self.canvas.pointer_up(workflow, &mut self.run, event)
    }

    pub fn wheel(&mut self, event: &WheelEvent) -> Vec<Intent> {
        let workflow = &mut self.workflows[self.active];
        self.canvas.wheel(workflow, &mut self.run, event)
    }

    pub fn key(&mut self, event: &KeyEvent) -> Vec<Intent> {
        let workflow = &mut self.workflows[self.active];
        self.canvas.key(workflow, &mut self.run, event)
    }

    /// Drops catalog agents, looked up by id, at a screen point. Unknown ids
    /// are skipped.
    pub fn drop_agents(&mut self, agent_ids: &[&str], at: Point) -> Vec<Intent> {
        let agents: Vec<Agent> = agent_ids
            .iter()
            .filter_map(|id| self.catalog.get(id).cloned())
            .collect();
        let workflow = &mut self.workflows[self.active];
        self.canvas.drop_agents(workflow, &mut self.run, agents, at)
    }
}
