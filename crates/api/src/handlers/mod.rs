pub mod fire_alerts;
