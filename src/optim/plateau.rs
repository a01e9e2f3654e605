//! Plateau-based learning rate scheduler.

use super::Optimizer;

/// Direction of improvement for the monitored metric.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlateauMode {
    /// Lower metric values are better (losses).
    Min,
    /// Higher metric values are better (accuracies).
    Max,
}

/// Reduce the learning rate when a monitored metric stops improving.
///
/// Stepped once per epoch with the metric value. After more than `patience`
/// consecutive epochs without improvement the optimizer's learning rate is
/// multiplied by `factor` (floored at `min_lr`) and the bad-epoch counter
/// resets.
///
/// # Example
///
/// ```
/// use leyenda::optim::{AdamW, Optimizer, PlateauMode, ReduceLROnPlateau};
///
/// let mut optimizer = AdamW::default_params(0.001);
/// let mut scheduler = ReduceLROnPlateau::new(PlateauMode::Min, 0.5, 2);
///
/// for val_loss in [1.0, 1.0, 1.0, 1.0] {
///     scheduler.step(val_loss, &mut optimizer);
/// }
/// assert!(optimizer.lr() < 0.001);
/// ```
pub struct ReduceLROnPlateau {
    mode: PlateauMode,
    factor: f32,
    patience: usize,
    threshold: f32,
    min_lr: f32,
    best: Option<f32>,
    num_bad_epochs: usize,
}

impl ReduceLROnPlateau {
    /// Create a new plateau scheduler.
    ///
    /// # Arguments
    /// * `mode` - Whether the metric improves downward or upward
    /// * `factor` - Multiplicative learning rate reduction (e.g. 0.5)
    /// * `patience` - Epochs without improvement tolerated before reducing
    pub fn new(mode: PlateauMode, factor: f32, patience: usize) -> Self {
        Self {
            mode,
            factor,
            patience,
            threshold: 0.0,
            min_lr: 0.0,
            best: None,
            num_bad_epochs: 0,
        }
    }

    /// Require at least this much improvement to reset patience.
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Never reduce the learning rate below this floor.
    pub fn with_min_lr(mut self, min_lr: f32) -> Self {
        self.min_lr = min_lr;
        self
    }

    /// Epochs since the monitored metric last improved.
    pub fn num_bad_epochs(&self) -> usize {
        self.num_bad_epochs
    }

    fn improved(&self, metric: f32) -> bool {
        match (self.mode, self.best) {
            (_, None) => true,
            (PlateauMode::Min, Some(best)) => metric < best - self.threshold,
            (PlateauMode::Max, Some(best)) => metric > best + self.threshold,
        }
    }

    /// Record one epoch's metric and reduce the learning rate if the metric
    /// has plateaued.
    pub fn step(&mut self, metric: f32, optimizer: &mut dyn Optimizer) {
        if self.improved(metric) {
            self.best = Some(metric);
            self.num_bad_epochs = 0;
            return;
        }

        self.num_bad_epochs += 1;
        if self.num_bad_epochs > self.patience {
            let new_lr = (optimizer.lr() * self.factor).max(self.min_lr);
            if new_lr < optimizer.lr() {
                println!("Reducing learning rate: {:.6} -> {:.6}", optimizer.lr(), new_lr);
                optimizer.set_lr(new_lr);
            }
            self.num_bad_epochs = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optim::AdamW;

    #[test]
    fn test_reduces_after_patience_exceeded() {
        let mut opt = AdamW::default_params(0.1);
        let mut sched = ReduceLROnPlateau::new(PlateauMode::Min, 0.5, 2);

        sched.step(1.0, &mut opt); // baseline
        sched.step(1.0, &mut opt); // bad 1
        sched.step(1.0, &mut opt); // bad 2
        assert_eq!(opt.lr(), 0.1);

        sched.step(1.0, &mut opt); // bad 3 > patience
        assert!((opt.lr() - 0.05).abs() < 1e-7);
        assert_eq!(sched.num_bad_epochs(), 0);
    }

    #[test]
    fn test_improvement_resets_counter() {
        let mut opt = AdamW::default_params(0.1);
        let mut sched = ReduceLROnPlateau::new(PlateauMode::Min, 0.5, 1);

        sched.step(1.0, &mut opt);
        sched.step(1.0, &mut opt);
        assert_eq!(sched.num_bad_epochs(), 1);

        sched.step(0.5, &mut opt);
        assert_eq!(sched.num_bad_epochs(), 0);
        assert_eq!(opt.lr(), 0.1);
    }

    #[test]
    fn test_max_mode() {
        let mut opt = AdamW::default_params(0.1);
        let mut sched = ReduceLROnPlateau::new(PlateauMode::Max, 0.5, 0);

        sched.step(0.5, &mut opt); // baseline
        sched.step(0.6, &mut opt); // improvement
        assert_eq!(opt.lr(), 0.1);

        sched.step(0.6, &mut opt); // not better, patience 0 exceeded
        assert!((opt.lr() - 0.05).abs() < 1e-7);
    }

    #[test]
    fn test_min_lr_floor() {
        let mut opt = AdamW::default_params(0.1);
        let mut sched =
            ReduceLROnPlateau::new(PlateauMode::Min, 0.5, 0).with_min_lr(0.08);

        sched.step(1.0, &mut opt);
        sched.step(1.0, &mut opt);
        assert!((opt.lr() - 0.08).abs() < 1e-7);

        sched.step(1.0, &mut opt);
        assert!((opt.lr() - 0.08).abs() < 1e-7);
    }

    #[test]
    fn test_threshold_requires_real_improvement() {
        let mut opt = AdamW::default_params(0.1);
        let mut sched =
            ReduceLROnPlateau::new(PlateauMode::Min, 0.5, 0).with_threshold(0.01);

        sched.step(1.0, &mut opt);
        // 0.995 is within threshold of 1.0: counts as a bad epoch.
        sched.step(0.995, &mut opt);
        assert!((opt.lr() - 0.05).abs() < 1e-7);
    }
}
