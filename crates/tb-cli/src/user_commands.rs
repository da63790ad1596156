use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// List board users with their assigned task counts
    List,

    /// Add a user by email
    Add { email: String },

    /// Remove a user and unassign them from every task
    Remove { email: String },
}
