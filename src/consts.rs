pub mod cli_consts {
    //! Client Configuration Constants
    //!
    //! Defaults, limits and user-facing strings for the dashboard, grouped by
    //! functional area.

    // =============================================================================
    // BACKEND
    // =============================================================================

    /// Base URL of a backend started locally with its default settings.
    pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

    /// Environment variable overriding the backend base URL.
    pub const API_URL_ENV_VAR: &str = "SAVVYSPEND_API_URL";

    /// Directory (under the user's home) holding the config file.
    pub const CONFIG_DIR_NAME: &str = ".savvyspend";

    /// Config file name inside [`CONFIG_DIR_NAME`].
    pub const CONFIG_FILE_NAME: &str = "config.json";

    /// Diagnostic log written while the dashboard owns the terminal.
    pub const LOG_FILE_NAME: &str = "savvyspend.log";

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Buffer size of the channel carrying request outcomes back to the UI.
    pub const OUTCOME_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // ML WORKFLOW
    // =============================================================================

    pub mod ml {
        /// Shown when the features text yields no usable row.
        pub const FEATURES_FORMAT_HINT: &str = "Enter features as: 1.0,2.0;3.0,4.0";

        /// Shown after the example model has been trained.
        pub const TRAIN_SUCCESS_MESSAGE: &str =
            "Model trained with example data! You can now predict.";

        /// Prefix of every training failure message.
        pub const TRAIN_FAILURE_PREFIX: &str = "Training failed: ";

        /// Example feature rows sent by "train with example data".
        pub const EXAMPLE_FEATURES: [[f64; 2]; 5] =
            [[1.0, 2.0], [2.0, 3.0], [3.0, 4.0], [4.0, 5.0], [5.0, 6.0]];

        /// Example targets matching [`EXAMPLE_FEATURES`] row by row.
        pub const EXAMPLE_TARGETS: [f64; 5] = [100.0, 200.0, 300.0, 400.0, 500.0];
    }
}
