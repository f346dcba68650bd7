use tracing::{debug, info, warn};

use crate::domain::{
    camera::{entities::capture_single_frame, ports::FrameSource},
    common::entities::app_errors::CoreError,
    meal_plan::{
        entities::{MealPlan, MealSuggestion},
        ports::MealPlanService,
        value_objects::{PlanRequest, SwapRequest},
    },
    pantry::{
        catalogue::{SuggestedIngredient, suggested_ingredients},
        entities::Pantry,
        value_objects::{PantryEntry, ToggleOutcome, same_ingredient_name},
    },
    preferences::{
        entities::UserPreferences,
        value_objects::{DietType, Weekday},
    },
    session::entities::{
        CAMERA_FAILURE_NOTICE, PLAN_FAILURE_NOTICE, PendingRequests, PlanOutcome, PlanStatus,
        RequestKind, RequestTicket, SCAN_FAILURE_NOTICE, ScanOutcome,
    },
    storage::{
        ports::KeyValueStore,
        services::{
            MEAL_PLAN_KEY, PANTRY_KEY, PREFERENCES_KEY, clear_all, load_meal_plan, load_pantry,
            load_preferences, save_json,
        },
    },
};

/// The app's state owner: preferences, pantry, the current plan and the
/// lifecycle of collaborator requests.
///
/// Mutations apply in memory first and then persist. A persistence failure
/// is returned as [`CoreError::StorageError`] but the in-memory change stands.
pub struct Session<S: KeyValueStore, P: MealPlanService> {
    store: S,
    planner: P,
    persist_plan: bool,
    preferences: UserPreferences,
    pantry: Pantry,
    plan: Option<MealPlan>,
    plan_status: PlanStatus,
    pending: PendingRequests,
    active_slot: Option<usize>,
    swap_options: Vec<MealSuggestion>,
    detected: Vec<String>,
    notice: Option<String>,
}

impl<S: KeyValueStore, P: MealPlanService> Session<S, P> {
    /// Restores persisted state. Missing or corrupt data falls back to
    /// defaults, so loading never fails.
    pub async fn load(store: S, planner: P, persist_plan: bool) -> Self {
        let preferences = load_preferences(&store).await;
        let pantry = load_pantry(&store).await;
        let plan = if persist_plan {
            load_meal_plan(&store).await
        } else {
            None
        };
        let plan_status = if plan.is_some() {
            PlanStatus::Ready
        } else {
            PlanStatus::Idle
        };

        Self {
            store,
            planner,
            persist_plan,
            preferences,
            pantry,
            plan,
            plan_status,
            pending: PendingRequests::default(),
            active_slot: None,
            swap_options: Vec::new(),
            detected: Vec::new(),
            notice: None,
        }
    }

    pub fn preferences(&self) -> &UserPreferences {
        &self.preferences
    }

    pub fn pantry(&self) -> &Pantry {
        &self.pantry
    }

    pub fn plan(&self) -> Option<&MealPlan> {
        self.plan.as_ref()
    }

    pub fn plan_status(&self) -> PlanStatus {
        self.plan_status
    }

    pub fn planner(&self) -> &P {
        &self.planner
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Returns and clears the transient notice.
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    fn set_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
    }

    async fn persist_preferences(&self) -> Result<(), CoreError> {
        save_json(&self.store, PREFERENCES_KEY, &self.preferences).await
    }

    async fn persist_pantry(&self) -> Result<(), CoreError> {
        save_json(&self.store, PANTRY_KEY, &self.pantry).await
    }

    async fn persist_plan(&self) -> Result<(), CoreError> {
        if !self.persist_plan {
            return Ok(());
        }
        match &self.plan {
            Some(plan) => save_json(&self.store, MEAL_PLAN_KEY, plan).await,
            None => self.store.remove(MEAL_PLAN_KEY).await,
        }
    }

    // Preferences

    pub async fn set_diet(&mut self, diet: DietType) -> Result<(), CoreError> {
        self.preferences.set_diet(diet);
        self.persist_preferences().await
    }

    pub async fn set_base_time(&mut self, minutes: u32) -> Result<(), CoreError> {
        self.preferences.set_base_time(minutes)?;
        self.persist_preferences().await
    }

    pub async fn set_busy_day_override(
        &mut self,
        day: Weekday,
        minutes: u32,
    ) -> Result<(), CoreError> {
        self.preferences.set_busy_day_override(day, minutes)?;
        self.persist_preferences().await
    }

    pub async fn clear_busy_day_override(&mut self, day: Weekday) -> Result<(), CoreError> {
        if self.preferences.clear_busy_day_override(day) {
            self.persist_preferences().await?;
        }
        Ok(())
    }

    pub async fn set_name(&mut self, name: &str) -> Result<(), CoreError> {
        self.preferences.set_name(name)?;
        self.persist_preferences().await
    }

    pub async fn sign_in(&mut self, name: &str) -> Result<(), CoreError> {
        self.preferences.sign_in(name)?;
        self.persist_preferences().await
    }

    pub async fn sign_out(&mut self) -> Result<(), CoreError> {
        self.preferences.sign_out();
        self.persist_preferences().await
    }

    // Pantry

    pub async fn toggle_pantry_item(
        &mut self,
        entry: impl Into<PantryEntry>,
    ) -> Result<ToggleOutcome, CoreError> {
        let entry = entry.into();
        let name = entry.name.clone();
        let outcome = self.pantry.toggle(entry);
        self.set_notice(outcome.notice(&name));
        self.persist_pantry().await?;
        Ok(outcome)
    }

    /// Trims and toggles a typed-in name. `Removed` signals that the name
    /// was already in the pantry.
    pub async fn add_custom_item(&mut self, raw_name: &str) -> Result<ToggleOutcome, CoreError> {
        let name = raw_name.trim();
        if name.is_empty() {
            return Err(CoreError::EmptyInput);
        }
        self.toggle_pantry_item(PantryEntry::manual(name)).await
    }

    pub fn suggested_ingredients(&self, query: &str) -> Vec<SuggestedIngredient> {
        suggested_ingredients(&self.pantry, query)
    }

    /// Clears preferences, pantry and plan, in memory and in storage.
    pub async fn reset_all(&mut self) -> Result<(), CoreError> {
        self.pending.cancel_all();
        self.preferences = UserPreferences::default();
        self.pantry.clear();
        self.plan = None;
        self.plan_status = PlanStatus::Idle;
        self.active_slot = None;
        self.swap_options.clear();
        self.detected.clear();
        self.notice = None;
        info!("session reset");
        clear_all(&self.store).await
    }

    /// Drops every outstanding request so late results are discarded.
    pub fn cancel_pending(&mut self) {
        self.pending.cancel_all();
        self.active_slot = None;
        self.swap_options.clear();
        if self.plan_status == PlanStatus::Requesting {
            self.plan_status = self.settled_plan_status();
        }
    }

    fn settled_plan_status(&self) -> PlanStatus {
        if self.plan.is_some() {
            PlanStatus::Ready
        } else {
            PlanStatus::Idle
        }
    }

    // Plan generation

    /// Starts a plan request from a snapshot of the current preferences and
    /// pantry. The request can run anywhere; hand the result back through
    /// [`Session::complete_plan`].
    pub fn begin_plan(&mut self) -> (RequestTicket, PlanRequest) {
        let ticket = self.pending.issue(RequestKind::Plan);
        self.plan_status = PlanStatus::Requesting;
        (ticket, PlanRequest::new(&self.preferences, &self.pantry))
    }

    pub async fn complete_plan(
        &mut self,
        ticket: RequestTicket,
        result: Result<MealPlan, CoreError>,
    ) -> Result<PlanOutcome, CoreError> {
        if !self.pending.settle(ticket) {
            debug!("discarding stale meal plan result");
            return Ok(PlanOutcome::Discarded);
        }

        match result {
            Ok(plan) => {
                self.plan = Some(plan);
                self.plan_status = PlanStatus::Ready;
                self.active_slot = None;
                self.swap_options.clear();
                self.persist_plan().await?;
                Ok(PlanOutcome::Applied)
            }
            Err(e) => {
                warn!(error = %e, "meal plan generation failed");
                self.plan_status = self.settled_plan_status();
                self.set_notice(PLAN_FAILURE_NOTICE);
                Ok(PlanOutcome::Failed(e))
            }
        }
    }

    pub async fn generate_plan(&mut self) -> Result<PlanOutcome, CoreError> {
        let (ticket, request) = self.begin_plan();
        let result = self.planner.generate_plan(request).await;
        self.complete_plan(ticket, result).await
    }

    // Plan editing

    fn plan_mut(&mut self) -> Result<&mut MealPlan, CoreError> {
        self.plan.as_mut().ok_or(CoreError::NoPlan)
    }

    pub async fn apply_swap(
        &mut self,
        index: usize,
        suggestion: MealSuggestion,
    ) -> Result<(), CoreError> {
        let name = suggestion.name.clone();
        self.plan_mut()?.apply_swap(index, suggestion)?;
        self.close_swaps();
        self.set_notice(format!("Swapped to {name}"));
        self.persist_plan().await
    }

    /// Content swap between `source_index` and the slot for `target_day`.
    /// Returns `false` when the plan has no such day.
    pub async fn move_meal(
        &mut self,
        source_index: usize,
        target_day: Weekday,
    ) -> Result<bool, CoreError> {
        let moved = self.plan_mut()?.move_meal(source_index, target_day)?;
        if moved {
            self.persist_plan().await?;
        }
        Ok(moved)
    }

    pub async fn dine_out(&mut self, index: usize) -> Result<(), CoreError> {
        self.plan_mut()?.dine_out(index)?;
        self.close_swaps();
        self.set_notice("Strategic pivot: Dining out.");
        self.persist_plan().await
    }

    pub async fn clear_meal(&mut self, index: usize) -> Result<(), CoreError> {
        self.plan_mut()?.clear_meal(index)?;
        self.persist_plan().await
    }

    // Swaps

    pub fn active_slot(&self) -> Option<usize> {
        self.active_slot
    }

    pub fn swap_options(&self) -> &[MealSuggestion] {
        &self.swap_options
    }

    /// Opens the swap sheet for a plan slot and snapshots the request.
    pub fn begin_swaps(&mut self, index: usize) -> Result<(RequestTicket, SwapRequest), CoreError> {
        let plan = self.plan.as_ref().ok_or(CoreError::NoPlan)?;
        let meal = plan.get(index).ok_or(CoreError::InvalidPlanIndex(index))?;
        let request = SwapRequest::new(
            meal.name.clone(),
            &self.preferences,
            &self.pantry,
            Some(meal.day),
        );

        let ticket = self.pending.issue(RequestKind::Swaps);
        self.active_slot = Some(index);
        self.swap_options.clear();
        Ok((ticket, request))
    }

    /// Returns whether the suggestions were applied.
    pub fn complete_swaps(&mut self, ticket: RequestTicket, suggestions: Vec<MealSuggestion>) -> bool {
        if !self.pending.settle(ticket) {
            debug!("discarding stale swap suggestions");
            return false;
        }
        self.swap_options = suggestions;
        true
    }

    /// Fetches alternatives for a slot. Collaborator failures yield an
    /// empty list; only a missing plan or bad index is an error.
    pub async fn request_swaps(&mut self, index: usize) -> Result<Vec<MealSuggestion>, CoreError> {
        let (ticket, request) = self.begin_swaps(index)?;
        let suggestions = self.planner.request_swaps(request).await;
        self.complete_swaps(ticket, suggestions);
        Ok(self.swap_options.clone())
    }

    pub fn close_swaps(&mut self) {
        self.pending.cancel(RequestKind::Swaps);
        self.active_slot = None;
        self.swap_options.clear();
    }

    // Scanning

    pub fn detected(&self) -> &[String] {
        &self.detected
    }

    pub fn begin_scan(&mut self) -> RequestTicket {
        self.detected.clear();
        self.pending.issue(RequestKind::Scan)
    }

    pub fn complete_scan(
        &mut self,
        ticket: RequestTicket,
        result: Result<Vec<String>, CoreError>,
    ) -> ScanOutcome {
        if !self.pending.settle(ticket) {
            debug!("discarding stale scan result");
            return ScanOutcome::Discarded;
        }

        match result {
            Ok(names) => {
                let mut detected: Vec<String> = Vec::with_capacity(names.len());
                for name in names {
                    if !detected.iter().any(|d| same_ingredient_name(d, &name)) {
                        detected.push(name);
                    }
                }
                self.detected = detected;
                ScanOutcome::Detected(self.detected.len())
            }
            Err(e) => {
                warn!(error = %e, "pantry scan failed");
                self.set_notice(SCAN_FAILURE_NOTICE);
                ScanOutcome::Failed(e)
            }
        }
    }

    pub async fn scan_image(&mut self, image_data: Vec<u8>) -> ScanOutcome {
        let ticket = self.begin_scan();
        let result = self.planner.scan_image(image_data).await;
        self.complete_scan(ticket, result)
    }

    /// Takes one frame from `camera`, releasing it before the request is
    /// sent, and scans it.
    pub async fn scan_with_camera<C: FrameSource>(&mut self, camera: &mut C) -> ScanOutcome {
        match capture_single_frame(camera) {
            Ok(frame) => self.scan_image(frame.to_vec()).await,
            Err(e) => {
                warn!(error = %e, "camera capture failed");
                self.set_notice(CAMERA_FAILURE_NOTICE);
                ScanOutcome::Failed(e)
            }
        }
    }

    /// Moves a detected name into the pantry.
    pub async fn confirm_detected(&mut self, name: &str) -> Result<ToggleOutcome, CoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::EmptyInput);
        }
        self.detected.retain(|d| !same_ingredient_name(d, name));
        self.toggle_pantry_item(PantryEntry::scanned(name)).await
    }

    pub fn dismiss_detected(&mut self, name: &str) -> bool {
        let before = self.detected.len();
        self.detected.retain(|d| !same_ingredient_name(d, name));
        self.detected.len() != before
    }

    pub fn clear_detected(&mut self) {
        self.detected.clear();
    }
}
