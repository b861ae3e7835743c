//! 预导入模块，方便使用

pub use super::homeworks::{
    ActiveModel as HomeworkActiveModel, Entity as Homeworks, Model as HomeworkModel,
};
pub use super::resources::{
    ActiveModel as ResourceActiveModel, Entity as Resources, Model as ResourceModel,
};
pub use super::submissions::{
    ActiveModel as SubmissionActiveModel, Entity as Submissions, Model as SubmissionModel,
};
pub use super::threads::{ActiveModel as ThreadActiveModel, Entity as Threads, Model as ThreadModel};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
