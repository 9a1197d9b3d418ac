mod navbar;
pub use navbar::NavBar;

mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod schedule;
pub use schedule::Schedule;

mod dashboard;
pub use dashboard::Dashboard;

mod voting;
pub use voting::Voting;

mod music;
pub use music::Music;

mod messages;
pub use messages::Messages;

mod admin;
pub use admin::Admin;

mod add_candidate;
pub use add_candidate::AddCandidate;
