//! Loader for dlib's `shape_predictor` model files.
//!
//! Reads raw `.dat` files and bzip2-compressed `.dat.bz2` files. The region
//! layout needs the 68-point model:
//!
//! ```bash
//! curl -LO http://dlib.net/files/shape_predictor_68_face_landmarks.dat.bz2
//! ```
//!
//! Layout, in dlib's serialization order:
//! version, initial shape, forests, anchor indices per stage, feature
//! offsets per stage.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use bzip2::read::BzDecoder;
use tracing::debug;

use crate::error::{Error, Result};
use crate::model::ShapePredictor;
use crate::tree::{CascadeStage, RegressionTree, Split};
use crate::types::{Point, Shape};

/// dlib's portable integer and float encoding.
///
/// An integer is a control byte (high bit: negative, low nibble: byte count)
/// followed by that many little-endian magnitude bytes. A float is a
/// mantissa integer and an exponent integer.
struct DlibReader<R: Read> {
    reader: R,
}

impl<R: Read> DlibReader<R> {
    fn new(reader: R) -> Self {
        Self { reader }
    }

    fn read_int(&mut self) -> Result<i64> {
        let mut control = [0u8; 1];
        self.reader.read_exact(&mut control)?;
        let negative = control[0] & 0x80 != 0;
        let len = (control[0] & 0x0F) as usize;
        if len > 8 {
            return Err(Error::InvalidModel(format!("Integer of {} bytes", len)));
        }

        let mut bytes = [0u8; 8];
        self.reader.read_exact(&mut bytes[..len])?;
        let magnitude = u64::from_le_bytes(bytes) as i64;
        Ok(if negative { -magnitude } else { magnitude })
    }

    fn read_len(&mut self) -> Result<usize> {
        let value = self.read_int()?;
        usize::try_from(value)
            .map_err(|_| Error::InvalidModel(format!("Negative length {}", value)))
    }

    fn read_float(&mut self) -> Result<f32> {
        let mantissa = self.read_int()?;
        let exponent = self.read_int()?;
        Ok((mantissa as f64 * 2f64.powi(exponent as i32)) as f32)
    }

    /// Column vector of `2 * n` floats read as `n` points.
    fn read_shape(&mut self) -> Result<Shape> {
        let rows = self.read_int()?.unsigned_abs() as usize;
        let cols = self.read_int()?.unsigned_abs() as usize;
        if cols != 1 || rows % 2 != 0 {
            return Err(Error::InvalidModel(format!(
                "Expected a 2n x 1 shape, got {}x{}",
                rows, cols
            )));
        }

        let mut points = Vec::with_capacity(rows / 2);
        for _ in 0..rows / 2 {
            let x = self.read_float()?;
            let y = self.read_float()?;
            points.push(Point::new(x, y));
        }
        Ok(Shape::new(points))
    }
}

/// Load a shape predictor from a `.dat` or `.dat.bz2` file.
pub fn load_dlib_model<P: AsRef<Path>>(path: P) -> Result<ShapePredictor> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);

    let model = if path.extension().is_some_and(|ext| ext == "bz2") {
        load_dlib_model_from_reader(BzDecoder::new(reader))?
    } else {
        load_dlib_model_from_reader(reader)?
    };

    debug!(
        ?path,
        landmarks = model.num_landmarks(),
        stages = model.num_cascade_stages(),
        "landmark model loaded"
    );
    Ok(model)
}

/// Load a shape predictor from an uncompressed stream.
pub fn load_dlib_model_from_reader<R: Read>(reader: R) -> Result<ShapePredictor> {
    let mut r = DlibReader::new(reader);

    let version = r.read_int()?;
    if version != 1 {
        return Err(Error::InvalidModel(format!(
            "Unsupported shape_predictor version {}",
            version
        )));
    }

    let mean_shape = r.read_shape()?;
    let num_landmarks = mean_shape.num_landmarks();
    if num_landmarks == 0 {
        return Err(Error::InvalidModel("Empty initial shape".into()));
    }

    let num_stages = r.read_len()?;
    let mut forests = Vec::with_capacity(num_stages);
    for _ in 0..num_stages {
        let num_trees = r.read_len()?;
        let mut trees = Vec::with_capacity(num_trees);
        for _ in 0..num_trees {
            trees.push(read_tree(&mut r, num_landmarks)?);
        }
        forests.push(trees);
    }

    let anchors = read_per_stage(&mut r, num_stages, |r| {
        let idx = r.read_len()?;
        if idx >= num_landmarks {
            return Err(Error::InvalidModel(format!("Anchor landmark {} out of range", idx)));
        }
        Ok(idx)
    })?;
    let offsets = read_per_stage(&mut r, num_stages, |r| {
        let x = r.read_float()?;
        let y = r.read_float()?;
        Ok(Point::new(x, y))
    })?;

    let mut cascade = Vec::with_capacity(num_stages);
    for ((trees, anchors), offsets) in forests.into_iter().zip(anchors).zip(offsets) {
        if anchors.len() != offsets.len() {
            return Err(Error::InvalidModel(format!(
                "{} anchors but {} offsets",
                anchors.len(),
                offsets.len()
            )));
        }
        let num_features = anchors.len();
        for tree in &trees {
            check_feature_indices(&tree.0, num_features)?;
        }
        let trees = trees
            .into_iter()
            .map(|(splits, leaves)| RegressionTree::new(splits, leaves))
            .collect();
        cascade.push(CascadeStage::new(anchors, offsets, trees));
    }

    Ok(ShapePredictor::new(mean_shape, cascade))
}

fn read_tree<R: Read>(r: &mut DlibReader<R>, num_landmarks: usize) -> Result<(Vec<Split>, Vec<Shape>)> {
    let num_splits = r.read_len()?;
    let mut splits = Vec::with_capacity(num_splits);
    for _ in 0..num_splits {
        let idx1 = r.read_len()?;
        let idx2 = r.read_len()?;
        let threshold = r.read_float()?;
        splits.push(Split {
            idx1,
            idx2,
            threshold,
        });
    }

    let num_leaves = r.read_len()?;
    if num_leaves != num_splits + 1 {
        return Err(Error::InvalidModel(format!(
            "Tree with {} splits has {} leaves",
            num_splits, num_leaves
        )));
    }

    let mut leaves = Vec::with_capacity(num_leaves);
    for _ in 0..num_leaves {
        let leaf = r.read_shape()?;
        if leaf.num_landmarks() != num_landmarks {
            return Err(Error::InvalidModel(format!(
                "Leaf moves {} landmarks, expected {}",
                leaf.num_landmarks(),
                num_landmarks
            )));
        }
        leaves.push(leaf);
    }

    Ok((splits, leaves))
}

/// A `vector<vector<T>>` that must have one entry per cascade stage.
fn read_per_stage<R: Read, T>(
    r: &mut DlibReader<R>,
    num_stages: usize,
    mut read_item: impl FnMut(&mut DlibReader<R>) -> Result<T>,
) -> Result<Vec<Vec<T>>> {
    let count = r.read_len()?;
    if count != num_stages {
        return Err(Error::InvalidModel(format!(
            "{} stages of features for {} cascade stages",
            count, num_stages
        )));
    }

    let mut stages = Vec::with_capacity(count);
    for _ in 0..count {
        let len = r.read_len()?;
        let mut items = Vec::with_capacity(len);
        for _ in 0..len {
            items.push(read_item(r)?);
        }
        stages.push(items);
    }
    Ok(stages)
}

fn check_feature_indices(splits: &[Split], num_features: usize) -> Result<()> {
    match splits
        .iter()
        .find(|s| s.idx1 >= num_features || s.idx2 >= num_features)
    {
        Some(s) => Err(Error::InvalidModel(format!(
            "Split on features ({}, {}) but the stage samples {}",
            s.idx1, s.idx2, num_features
        ))),
        None => Ok(()),
    }
}
