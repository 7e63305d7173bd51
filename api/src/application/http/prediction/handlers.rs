pub mod predict_goal;
