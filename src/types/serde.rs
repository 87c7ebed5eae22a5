pub mod chrono_dt_secs;
