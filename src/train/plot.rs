//! Loss-curve plot export.

use std::path::Path;

use plotters::prelude::*;

use crate::error::{Error, Result};

/// Render the train/validation loss histories to an SVG chart.
///
/// One static chart per run: two labelled line series over epochs, written at
/// the end of training. Empty histories are skipped rather than drawn.
pub fn save_loss_plot(train_losses: &[f32], val_losses: &[f32], path: &Path) -> Result<()> {
    if train_losses.is_empty() && val_losses.is_empty() {
        return Ok(());
    }

    let max_epochs = train_losses.len().max(val_losses.len());
    let max_loss = train_losses
        .iter()
        .chain(val_losses.iter())
        .fold(f32::MIN, |acc, &v| acc.max(v))
        .max(f32::EPSILON);

    let root = SVGBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| Error::Plot(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Training and Validation Loss", ("sans-serif", 24))
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0f32..max_epochs as f32, 0f32..max_loss * 1.05)
        .map_err(|e| Error::Plot(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("Epoch")
        .y_desc("Loss")
        .draw()
        .map_err(|e| Error::Plot(e.to_string()))?;

    chart
        .draw_series(LineSeries::new(
            train_losses.iter().enumerate().map(|(i, &v)| (i as f32, v)),
            &BLUE,
        ))
        .map_err(|e| Error::Plot(e.to_string()))?
        .label("Train Loss")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .draw_series(LineSeries::new(
            val_losses.iter().enumerate().map(|(i, &v)| (i as f32, v)),
            &RED,
        ))
        .map_err(|e| Error::Plot(e.to_string()))?
        .label("Validation Loss")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()
        .map_err(|e| Error::Plot(e.to_string()))?;

    root.present().map_err(|e| Error::Plot(e.to_string()))?;
    Ok(())
}
