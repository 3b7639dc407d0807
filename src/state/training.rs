//! Training Console State
//!
//! Model versions, run hyperparameters and the bookkeeping behind the
//! simulated dataset uploads and training epochs.

/// Bytes advanced per simulated upload tick
pub const UPLOAD_CHUNK_BYTES: u64 = 1024 * 1024;

/// Shell line logged when a run is stopped early
pub const STOP_LOG_LINE: &str = "Training stopped by user.";

/// Shell line logged when a run finishes all epochs
pub const COMPLETE_LOG_LINE: &str = "Training complete.";

/// Aggregate quality metrics for a trained model version
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Performance {
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
}

/// One released model version
#[derive(Clone, Debug, PartialEq)]
pub struct ModelVersion {
    pub id: String,
    pub name: String,
    pub created_at: String,
    pub accuracy: f64,
    pub is_active: bool,
    pub performance: Performance,
}

/// The known versions, at most one of them active
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VersionSet {
    versions: Vec<ModelVersion>,
}

impl VersionSet {
    pub fn seeded() -> Self {
        let fixture = |id: &str, name: &str, created_at: &str, accuracy: f64, is_active: bool, p: f64, r: f64, f1: f64| {
            ModelVersion {
                id: id.to_string(),
                name: name.to_string(),
                created_at: created_at.to_string(),
                accuracy,
                is_active,
                performance: Performance {
                    precision: p,
                    recall: r,
                    f1_score: f1,
                },
            }
        };
        Self {
            versions: vec![
                fixture("1", "v1.0.0", "2026-03-02", 0.85, false, 0.83, 0.87, 0.85),
                fixture("2", "v1.1.0", "2026-04-18", 0.87, false, 0.86, 0.88, 0.87),
                fixture("3", "v2.0.0", "2026-06-07", 0.92, true, 0.91, 0.93, 0.92),
            ],
        }
    }

    pub fn all(&self) -> &[ModelVersion] {
        &self.versions
    }

    pub fn get(&self, id: &str) -> Option<&ModelVersion> {
        self.versions.iter().find(|v| v.id == id)
    }

    pub fn active(&self) -> Option<&ModelVersion> {
        self.versions.iter().find(|v| v.is_active)
    }

    /// Make `id` the active version. The whole set is remapped, so exactly
    /// one version is active afterwards (none if `id` is unknown).
    pub fn activate(&mut self, id: &str) {
        for version in &mut self.versions {
            version.is_active = version.id == id;
        }
    }

    /// The active version cannot be deleted; the UI disables the action.
    pub fn can_delete(&self, id: &str) -> bool {
        self.get(id).is_some_and(|v| !v.is_active)
    }

    /// Delete a version. Refuses the active one; returns whether anything
    /// was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        if !self.can_delete(id) {
            return false;
        }
        let before = self.versions.len();
        self.versions.retain(|v| v.id != id);
        self.versions.len() < before
    }
}

/// Kind of dataset artifact uploaded before training
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadKind {
    ImagesZip,
    AnnotationsJson,
}

impl UploadKind {
    /// Multipart field name on the upload endpoint
    pub fn field_name(self) -> &'static str {
        match self {
            UploadKind::ImagesZip => "images_zip",
            UploadKind::AnnotationsJson => "annotations_json",
        }
    }

    /// `accept` attribute for the file picker
    pub fn accept(self) -> &'static str {
        match self {
            UploadKind::ImagesZip => ".zip",
            UploadKind::AnnotationsJson => ".json",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            UploadKind::ImagesZip => "Image dataset (ZIP)",
            UploadKind::AnnotationsJson => "Annotations (JSON)",
        }
    }
}

/// Which model a run targets, decided by the artifacts on hand
pub fn model_for_uploads(has_images: bool, has_annotations: bool) -> Option<&'static str> {
    match (has_images, has_annotations) {
        (true, true) => Some("Panoptes"),
        (true, false) => Some("Iris"),
        (false, true) => Some("Hermes"),
        (false, false) => None,
    }
}

/// Progress bookkeeping for one simulated chunked upload
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UploadTracker {
    total: u64,
    uploaded: u64,
}

impl UploadTracker {
    pub fn new(total_bytes: u64) -> Self {
        Self {
            total: total_bytes,
            uploaded: 0,
        }
    }

    /// Advance by one chunk, clamped to the file size, and return the new
    /// percentage.
    pub fn advance(&mut self) -> u32 {
        self.uploaded = (self.uploaded + UPLOAD_CHUNK_BYTES).min(self.total);
        self.percent()
    }

    /// Whole-percent progress, floored so 100 appears only once the last
    /// chunk is in. Empty files count as done.
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 100;
        }
        (self.uploaded * 100 / self.total) as u32
    }

    pub fn is_done(&self) -> bool {
        self.uploaded >= self.total
    }
}

/// Hyperparameters for a run
#[derive(Clone, Debug, PartialEq)]
pub struct TrainingParams {
    pub learning_rate: f64,
    pub batch_size: u32,
    pub epochs: u32,
    pub optimizer: Optimizer,
    pub device: ComputeDevice,
}

impl Default for TrainingParams {
    fn default() -> Self {
        Self {
            learning_rate: 0.001,
            batch_size: 32,
            epochs: 10,
            optimizer: Optimizer::default(),
            device: ComputeDevice::default(),
        }
    }
}

impl TrainingParams {
    /// `min`/`max` on a number input constrain the spinner, not typed
    /// text, so values are clamped on the way in.
    pub fn set_batch_size(&mut self, value: u32) {
        self.batch_size = value.clamp(1, 128);
    }

    pub fn set_epochs(&mut self, value: u32) {
        self.epochs = value.clamp(1, 100);
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Optimizer {
    #[default]
    Adam,
    Sgd,
    RmsProp,
}

impl Optimizer {
    pub const ALL: [Optimizer; 3] = [Optimizer::Adam, Optimizer::Sgd, Optimizer::RmsProp];

    /// `value` attribute used by the select control
    pub fn as_value(self) -> &'static str {
        match self {
            Optimizer::Adam => "adam",
            Optimizer::Sgd => "sgd",
            Optimizer::RmsProp => "rmsprop",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "sgd" => Optimizer::Sgd,
            "rmsprop" => Optimizer::RmsProp,
            _ => Optimizer::Adam,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Optimizer::Adam => "Adam",
            Optimizer::Sgd => "SGD",
            Optimizer::RmsProp => "RMSprop",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ComputeDevice {
    #[default]
    Gpu,
    Cpu,
    Tpu,
}

impl ComputeDevice {
    pub const ALL: [ComputeDevice; 3] = [ComputeDevice::Gpu, ComputeDevice::Cpu, ComputeDevice::Tpu];

    pub fn as_value(self) -> &'static str {
        match self {
            ComputeDevice::Gpu => "gpu",
            ComputeDevice::Cpu => "cpu",
            ComputeDevice::Tpu => "tpu",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "cpu" => ComputeDevice::Cpu,
            "tpu" => ComputeDevice::Tpu,
            _ => ComputeDevice::Gpu,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ComputeDevice::Gpu => "GPU",
            ComputeDevice::Cpu => "CPU",
            ComputeDevice::Tpu => "TPU",
        }
    }
}

/// Loss/accuracy sample recorded after one simulated epoch
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EpochStat {
    pub epoch: u32,
    pub loss: f64,
    pub accuracy: f64,
}

/// Map two uniform rolls in [0, 1) onto an epoch's fake loss and accuracy:
/// loss in [0, 0.5), accuracy in [0.7, 0.9).
fn simulated_epoch(epoch: u32, loss_roll: f64, accuracy_roll: f64) -> EpochStat {
    EpochStat {
        epoch,
        loss: loss_roll * 0.5,
        accuracy: 0.7 + accuracy_roll * 0.2,
    }
}

/// One step of the run loop, decided after the epoch's wait. A stop request
/// seen here halts the run with nothing recorded for this epoch.
pub fn epoch_step(
    stop_requested: bool,
    epoch: u32,
    loss_roll: f64,
    accuracy_roll: f64,
) -> Option<EpochStat> {
    if stop_requested {
        return None;
    }
    Some(simulated_epoch(epoch, loss_roll, accuracy_roll))
}

/// Shell line announcing a run
pub fn start_log_line(model: &str) -> String {
    format!("Starting {} training...", model)
}

/// Shell line for one recorded epoch
pub fn epoch_log_line(stat: &EpochStat, total_epochs: u32) -> String {
    format!(
        "Epoch {}/{} - Loss: {:.4} - Accuracy: {:.4}",
        stat.epoch, total_epochs, stat.loss, stat.accuracy
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_versions_have_one_active() {
        let set = VersionSet::seeded();
        assert_eq!(set.all().len(), 3);
        assert_eq!(set.all().iter().filter(|v| v.is_active).count(), 1);
        assert_eq!(set.active().map(|v| v.name.as_str()), Some("v2.0.0"));
    }

    #[test]
    fn test_activate_leaves_exactly_one_active() {
        let mut set = VersionSet::seeded();
        set.activate("1");
        assert_eq!(set.all().iter().filter(|v| v.is_active).count(), 1);
        assert!(set.get("1").unwrap().is_active);
        assert!(!set.get("3").unwrap().is_active);

        // Re-activating the same version is a no-op, not a second active.
        set.activate("1");
        assert_eq!(set.all().iter().filter(|v| v.is_active).count(), 1);
    }

    #[test]
    fn test_active_summary_follows_activation() {
        let mut set = VersionSet::seeded();
        set.activate("2");

        let active = set.active().expect("an active version remains");
        assert_eq!(active.name, "v1.1.0");
        assert_eq!(active.created_at, "2026-04-18");
        assert_eq!(active.accuracy, 0.87);
        assert_eq!(active.performance.precision, 0.86);
        assert_eq!(active.performance.recall, 0.88);
    }

    #[test]
    fn test_active_version_cannot_be_deleted() {
        let mut set = VersionSet::seeded();
        assert!(!set.can_delete("3"));
        assert!(!set.delete("3"));
        assert_eq!(set.all().len(), 3);
    }

    #[test]
    fn test_inactive_version_deletes() {
        let mut set = VersionSet::seeded();
        assert!(set.can_delete("1"));
        assert!(set.delete("1"));
        assert_eq!(set.all().len(), 2);
        assert!(set.get("1").is_none());
    }

    #[test]
    fn test_sole_version_active_blocks_delete() {
        let mut set = VersionSet::seeded();
        set.delete("1");
        set.delete("2");
        assert_eq!(set.all().len(), 1);
        assert!(!set.can_delete("3"));
        assert!(!set.delete("3"));
        assert_eq!(set.all().len(), 1);
    }

    #[test]
    fn test_upload_progress_monotonic_to_completion() {
        // 3.5 MiB file: four chunks, last one partial.
        let mut tracker = UploadTracker::new(7 * 512 * 1024);
        let mut last = tracker.percent();
        let mut steps = 0;
        while !tracker.is_done() {
            let pct = tracker.advance();
            assert!(pct >= last, "progress went backwards: {} -> {}", last, pct);
            last = pct;
            steps += 1;
            assert!(steps <= 4, "tracker failed to terminate");
        }
        assert_eq!(last, 100);
    }

    #[test]
    fn test_percent_reaches_100_only_when_done() {
        // 249 of 250 chunks is 99.6%; the bar must not show 100 yet.
        let mut tracker = UploadTracker::new(250 * UPLOAD_CHUNK_BYTES);
        let mut pct = tracker.percent();
        while !tracker.is_done() {
            pct = tracker.advance();
            if !tracker.is_done() {
                assert!(pct < 100, "showed 100 before completion");
            }
        }
        assert_eq!(pct, 100);
    }

    #[test]
    fn test_upload_progress_handles_tiny_and_empty_files() {
        let mut tiny = UploadTracker::new(10);
        assert_eq!(tiny.advance(), 100);
        assert!(tiny.is_done());

        let empty = UploadTracker::new(0);
        assert_eq!(empty.percent(), 100);
        assert!(empty.is_done());
    }

    #[test]
    fn test_model_selection_follows_uploads() {
        assert_eq!(model_for_uploads(true, true), Some("Panoptes"));
        assert_eq!(model_for_uploads(true, false), Some("Iris"));
        assert_eq!(model_for_uploads(false, true), Some("Hermes"));
        assert_eq!(model_for_uploads(false, false), None);
    }

    #[test]
    fn test_epoch_stats_stay_in_band() {
        let low = simulated_epoch(1, 0.0, 0.0);
        assert_eq!(low.loss, 0.0);
        assert!((low.accuracy - 0.7).abs() < 1e-9);

        let high = simulated_epoch(2, 0.999, 0.999);
        assert!(high.loss < 0.5);
        assert!(high.accuracy < 0.9);
    }

    #[test]
    fn test_epoch_log_line_format() {
        let stat = EpochStat {
            epoch: 3,
            loss: 0.12345,
            accuracy: 0.87654,
        };
        assert_eq!(
            epoch_log_line(&stat, 10),
            "Epoch 3/10 - Loss: 0.1235 - Accuracy: 0.8765"
        );
    }

    #[test]
    fn test_stop_request_halts_before_recording() {
        let total = 5;
        let mut stats: Vec<EpochStat> = Vec::new();
        let mut log = vec![start_log_line("Panoptes")];

        for epoch in 1..=total {
            let stop_requested = epoch == 3;
            match epoch_step(stop_requested, epoch, 0.2, 0.5) {
                Some(stat) => {
                    stats.push(stat);
                    log.push(epoch_log_line(&stat, total));
                }
                None => {
                    log.push(STOP_LOG_LINE.to_string());
                    break;
                }
            }
        }

        assert_eq!(stats.len(), 2);
        assert_eq!(stats.last().map(|s| s.epoch), Some(2));
        assert_eq!(log.last().map(String::as_str), Some(STOP_LOG_LINE));
        assert!(!log.iter().any(|line| line.starts_with("Epoch 3/")));
    }

    #[test]
    fn test_typed_params_clamp_to_range() {
        let mut params = TrainingParams::default();

        params.set_epochs(0);
        assert_eq!(params.epochs, 1);
        assert_eq!((1..=params.epochs).count(), 1);
        params.set_epochs(500);
        assert_eq!(params.epochs, 100);
        params.set_epochs(25);
        assert_eq!(params.epochs, 25);

        params.set_batch_size(0);
        assert_eq!(params.batch_size, 1);
        params.set_batch_size(500);
        assert_eq!(params.batch_size, 128);
        params.set_batch_size(64);
        assert_eq!(params.batch_size, 64);
    }

    #[test]
    fn test_param_select_values_round_trip() {
        for opt in Optimizer::ALL {
            assert_eq!(Optimizer::from_value(opt.as_value()), opt);
        }
        for device in ComputeDevice::ALL {
            assert_eq!(ComputeDevice::from_value(device.as_value()), device);
        }
        assert_eq!(Optimizer::from_value("bogus"), Optimizer::Adam);
    }
}
