// models.rs - 模块目录入口，导出所有子模块
pub mod config;
pub mod estimates;
pub mod results;
pub mod utils;

// 重新导出常用类型
pub use config::{CollisionPolicy, Config, ErrorPolicy};
pub use estimates::{RunLocation, StatisticSelector, ESTIMATES_FILE};
pub use results::{Collision, ResultMap, ScrapeReport, SkippedRun};
pub use utils::parse_name;
