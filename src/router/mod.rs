pub mod quote_router;
