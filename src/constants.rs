// Storage keys
pub const USERS_KEY: &str = "mockUsers";
pub const USER_DATA_KEY_PREFIX: &str = "userData_";

// Storage configuration
pub const DEFAULT_DATA_PATH: &str = "data";

// Identity seeded when no directory has been persisted yet
pub const DEFAULT_USER_ID: &str = "123-abc-456";
pub const DEFAULT_USER_NAME: &str = "Maria Silva";
pub const DEFAULT_USER_EMAIL: &str = "maria.silva@example.com";
pub const DEFAULT_USER_PASSWORD: &str = "123";
pub const DEFAULT_USER_AVATAR: &str = "https://i.pravatar.cc/150?u=a042581f4e29026704d";

// Avatar service used to derive a placeholder avatar for new accounts
pub const AVATAR_URL_BASE: &str = "https://i.pravatar.cc/150?u=";

// First-run sample data shown to users with no persisted snapshot
pub const SEED_DEBT_LOAN: &str = "Empréstimo Banco";
pub const SEED_DEBT_CARD: &str = "Cartão de Crédito";
pub const SEED_TRANSACTION_SALARY: &str = "Salário";
pub const SEED_TRANSACTION_RENT: &str = "Aluguel";
pub const SEED_APPOINTMENT_SERVICE: &str = "Trança Nagô";

// Validation limits
pub const MAX_DESCRIPTION_LENGTH: usize = 255;
pub const MAX_NAME_LENGTH: usize = 50;
pub const MIN_PASSWORD_LENGTH: usize = 3;
