/// Entity operations against a mocked connection
pub mod mock_tests;

/// CRUD operations against a live database
pub mod crud_tests;
