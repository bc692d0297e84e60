use weft_core::{AsyncConnection, AsyncCursor, Connection, Cursor, DriverError, Error, Result};

/// Cheapest statement proving the session still reaches the server.
pub const PING_SQL: &str = "SELECT 1 FROM SYSPROGRESS.SYSCALCTABLE WHERE 1=0";

/// Driver codes of a broken link, a timeout and a closed connection.
const DISCONNECT_CODES: [&str; 3] = ["08S01", "HYT00", "08003"];
const DISCONNECT_MESSAGES: [&str; 2] = ["Socket closed", "connection is not available"];

/// Whether the error means the connection is dead and must be discarded.
pub fn is_disconnect(error: &Error) -> bool {
    let code = error
        .chain()
        .filter_map(|e| e.downcast_ref::<DriverError>())
        .any(|e| DISCONNECT_CODES.contains(&e.code.as_str()));
    if code {
        return true;
    }
    let message = format!("{:#}", error);
    DISCONNECT_MESSAGES.iter().any(|v| message.contains(v))
}

fn is_driver_error(error: &Error) -> bool {
    error.chain().any(|e| e.is::<DriverError>())
}

/// Driver errors escape the ping, any other failure means the connection is not usable.
fn ping_outcome(result: Result<()>) -> Result<bool> {
    match result {
        Ok(()) => Ok(true),
        Err(error) if is_driver_error(&error) => {
            let error = error.context("While pinging the connection");
            log::error!("{:#}", error);
            Err(error)
        }
        Err(error) => {
            log::warn!("Ping failed, the connection is considered unusable: {:#}", error);
            Ok(false)
        }
    }
}

pub fn ping<C: Connection>(connection: &mut C) -> Result<bool> {
    let result = connection.cursor().and_then(|mut cursor| {
        let executed = cursor.execute(PING_SQL, &[]);
        let closed = cursor.close();
        executed.and(closed)
    });
    ping_outcome(result)
}

pub async fn ping_async<C: AsyncConnection>(connection: &mut C) -> Result<bool> {
    let result = async {
        let mut cursor = connection.cursor().await?;
        let executed = cursor.execute(PING_SQL, &[]).await;
        let closed = cursor.close().await;
        executed.and(closed)
    }
    .await;
    ping_outcome(result)
}
