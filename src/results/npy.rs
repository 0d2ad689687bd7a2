//! NumPy `.npy` room matrices.

use super::{MatrixReader, RoomFile};
use crate::error::RoomError;
use ndarray::Array2;
use ndarray_npy::{ReadNpyError, read_npy};

/// Reads `float64` matrices, widening `float32` ones.
#[derive(Debug, Default, Clone, Copy)]
pub struct NpyMatrixReader;

impl MatrixReader for NpyMatrixReader {
    fn read_matrix(&self, room: &RoomFile) -> Result<Array2<f64>, RoomError> {
        let load_error = |source: ReadNpyError| RoomError::Load {
            path: room.path.clone(),
            source,
        };
        match read_npy::<_, Array2<f64>>(&room.path) {
            Ok(matrix) => Ok(matrix),
            Err(ReadNpyError::WrongDescriptor(_)) => read_npy::<_, Array2<f32>>(&room.path)
                .map(|matrix| matrix.mapv(f64::from))
                .map_err(load_error),
            Err(err) => Err(load_error(err)),
        }
    }
}
