#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    HotelNotFound(String),
    UnsupportedRoomType { hotel_id: String, room_type: String },
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::HotelNotFound(id) => write!(f, "hotel not found: {id}"),
            EngineError::UnsupportedRoomType { hotel_id, room_type } => {
                write!(f, "room type {room_type} is not supported by hotel {hotel_id}")
            }
        }
    }
}

impl std::error::Error for EngineError {}
