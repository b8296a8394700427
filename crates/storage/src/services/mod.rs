pub mod results_upsert;
