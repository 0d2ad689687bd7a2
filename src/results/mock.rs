use super::{MatrixReader, RoomFile};
use crate::error::RoomError;
use ndarray::Array2;
use ndarray_npy::ReadNpyError;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub enum MockRoomBehavior {
    Matrix(Array2<f64>),
    FailRead,
}

impl MockRoomBehavior {
    pub fn uniform(points: usize, hours: usize, lux: f64) -> Self {
        Self::Matrix(Array2::from_elem((points, hours), lux))
    }
}

/// Serves matrices from memory, keyed by room label.
#[derive(Debug, Default)]
pub struct MockMatrixReader {
    rooms: HashMap<String, MockRoomBehavior>,
}

impl MockMatrixReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_room(mut self, label: &str, behavior: MockRoomBehavior) -> Self {
        self.rooms.insert(label.to_string(), behavior);
        self
    }

    /// Room files sorted by label, the order discovery would list them in.
    pub fn room_files(&self) -> Vec<RoomFile> {
        let mut labels: Vec<&String> = self.rooms.keys().collect();
        labels.sort();
        labels
            .into_iter()
            .map(|label| RoomFile {
                label: label.clone(),
                path: format!("{label}.npy").into(),
            })
            .collect()
    }
}

impl MatrixReader for MockMatrixReader {
    fn read_matrix(&self, room: &RoomFile) -> Result<Array2<f64>, RoomError> {
        match self.rooms.get(&room.label) {
            Some(MockRoomBehavior::Matrix(matrix)) => Ok(matrix.clone()),
            Some(MockRoomBehavior::FailRead) | None => Err(RoomError::Load {
                path: room.path.clone(),
                source: ReadNpyError::Io(std::io::Error::other("mock read failed")),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serves_configured_matrix() {
        let reader = MockMatrixReader::new().with_room("A", MockRoomBehavior::uniform(2, 3, 500.0));
        let rooms = reader.room_files();

        let matrix = reader.read_matrix(&rooms[0]).expect("mock matrix");

        assert_eq!(matrix.dim(), (2, 3));
    }

    #[test]
    fn read_can_fail() {
        let reader = MockMatrixReader::new().with_room("A", MockRoomBehavior::FailRead);
        let rooms = reader.room_files();

        let err = reader.read_matrix(&rooms[0]).unwrap_err();

        assert!(err.to_string().starts_with("could not read A.npy"));
    }
}
