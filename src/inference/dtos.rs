pub mod creative_request_dto;
pub mod verified_request_dto;
